// Host-side tests for the procedural sound renders. The crate itself is
// wasm-only, so the pure synthesis module is included directly.

#![allow(dead_code)]
mod synth {
    include!("../src/core/synth.rs");
}

use std::f32::consts::PI;
use synth::*;

const SR: f32 = 44_100.0;

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0_f32, |m, s| m.max(s.abs()))
}

#[test]
fn click_buffer_has_expected_shape() {
    let buf = render_click(SR, 1);
    assert_eq!(buf.len(), (SR * CLICK_SECONDS) as usize);
    assert_eq!(buf.left.len(), buf.right.len());
    assert!(!buf.is_empty());
    assert!(buf.left.iter().chain(&buf.right).all(|s| s.is_finite()));
    assert!(peak(&buf.left) <= 1.0);
    assert!(peak(&buf.right) <= 1.0);
}

#[test]
fn click_layers_land_where_expected() {
    let buf = render_click(SR, 1);
    // Transient plus ping at the very start
    assert!(peak(&buf.left[..400]) > 0.05);
    // Echo tail well past the transient
    assert!(peak(&buf.left[12_000..12_400]) > 0.0);
    // The ping rings through the first stretch even between echoes
    assert!(peak(&buf.left[1_000..1_500]) > 0.01);
    // Silence once every layer has decayed
    assert_eq!(peak(&buf.left[20_000..]), 0.0);
}

#[test]
fn buffer_lengths_scale_with_sample_rate() {
    let half = SR / 2.0;
    assert_eq!(render_click(half, 1).len() * 2, render_click(SR, 1).len());
    assert_eq!(render_wind(half, 1).len() * 2, render_wind(SR, 1).len());
    assert_eq!(
        render_chord_loop(half, &DRONE_CHORD, 0.05).len() * 2,
        render_chord_loop(SR, &DRONE_CHORD, 0.05).len()
    );
}

#[test]
fn click_render_is_deterministic() {
    let a = render_click(SR, 42);
    let b = render_click(SR, 42);
    assert_eq!(a.left, b.left);
    assert_eq!(a.right, b.right);

    let c = render_click(SR, 43);
    assert!(a.left != c.left, "different seeds should differ");
}

#[test]
fn wind_is_a_shaped_swoosh() {
    let data = render_wind(SR, 7);
    assert_eq!(data.len(), (SR * WIND_SECONDS) as usize);
    assert!(data.iter().all(|s| s.is_finite()));
    // Leaky-integrator output stays well inside the envelope's headroom
    assert!(peak(&data) <= 0.2);
    // Envelope starts at zero and dies away at the end
    assert_eq!(data[0], 0.0);
    assert!(data[data.len() - 1].abs() < 0.01);

    // Louder in the middle than at either edge
    let edge_len = data.len() / 20;
    let mid_start = data.len() * 3 / 10;
    let mid = peak(&data[mid_start..mid_start + edge_len]);
    assert!(mid > peak(&data[..edge_len]));
    assert!(mid > peak(&data[data.len() - edge_len..]));
}

#[test]
fn wind_render_is_deterministic() {
    assert_eq!(render_wind(SR, 99), render_wind(SR, 99));
}

#[test]
fn chord_loop_fades_at_both_ends() {
    let buf = render_chord_loop(SR, &DRONE_CHORD, DRONE_PARTIAL_LEVEL);
    assert_eq!(buf.len(), (SR * LOOP_SECONDS) as usize);
    assert_eq!(buf.left, buf.right);
    assert_eq!(buf.left[0], 0.0);
    assert!(buf.left[buf.len() - 1].abs() < 0.01);
    // Full level away from the boundary
    assert!(peak(&buf.left[2_000..4_000]) > DRONE_PARTIAL_LEVEL);
}

#[test]
fn chord_loop_sums_detuned_sine_pairs() {
    let buf = render_chord_loop(SR, &[100.0], 0.5);
    // Away from the edge fades the signal is exactly the detuned pair
    for &i in &[5_000_usize, 44_100, 100_000] {
        let t = i as f32 / SR;
        let expected =
            ((t * 100.0 * 2.0 * PI).sin() + (t * 101.0 * 2.0 * PI).sin()) * 0.5;
        assert!(
            (buf.left[i] - expected).abs() < 1e-4,
            "sample {i}: got {}, expected {expected}",
            buf.left[i]
        );
    }
}

#[test]
fn section_chords_cover_the_page() {
    assert_eq!(SECTION_CHORDS.len(), 9);
    for (i, (name, chord)) in SECTION_CHORDS.iter().enumerate() {
        assert!(!name.is_empty());
        // Names are unique
        assert!(SECTION_CHORDS[..i].iter().all(|(n, _)| n != name));
        // Each chord ascends and stays in a sensible audio range
        for w in chord.windows(2) {
            assert!(w[0] < w[1], "{name} chord should ascend");
        }
        assert!(chord[0] >= 100.0 && chord[3] <= 700.0, "{name} out of range");
    }

    assert_eq!(section_chord("hero"), Some(&[260.0, 390.0, 520.0, 650.0]));
    assert!(section_chord("footer").is_some());
    // The badge modal plays its chord via a click trigger rather than
    // the section scan; the lookup must still resolve
    assert_eq!(section_chord("badge"), Some(&[300.0, 420.0, 540.0, 660.0]));
    assert_eq!(section_chord("no-such-section"), None);
}

#[test]
fn drone_chord_is_an_a_major_stack() {
    assert_eq!(DRONE_CHORD[0], 220.0);
    assert_eq!(DRONE_CHORD[2], 440.0);
    for w in DRONE_CHORD.windows(2) {
        assert!(w[0] < w[1]);
    }
}
