// Procedural synthesis of every sound the page plays. Buffers are
// rendered once at init time from deterministic noise, so no audio
// assets ship with the site and host-side tests can check the output.

use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::PI;

// Buffer lengths (seconds)
pub const CLICK_SECONDS: f32 = 2.0;
pub const WIND_SECONDS: f32 = 0.6;
pub const LOOP_SECONDS: f32 = 4.0;

// Click layers
const TRANSIENT_SAMPLES: usize = 400;
const ECHO_DELAYS: [usize; 6] = [2000, 4000, 6000, 8000, 12000, 16000];
const ECHO_RIGHT_OFFSET: usize = 50;
const PING_SAMPLES: usize = 4000;
const PING_FREQ_HZ: f32 = 2000.0;

// Chord loops
pub const DRONE_CHORD: [f32; 4] = [220.0, 329.63, 440.0, 554.37];
pub const DRONE_PARTIAL_LEVEL: f32 = 0.05;
pub const AMBIENT_PARTIAL_LEVEL: f32 = 0.03;
const DETUNE_RATIO: f32 = 1.01;
const LOOP_FADE_SAMPLES: usize = 1000;

/// Chord per page section; keys match the `section[id]` elements.
pub const SECTION_CHORDS: &[(&str, [f32; 4])] = &[
    ("hero", [260.0, 390.0, 520.0, 650.0]),
    ("about", [220.0, 330.0, 440.0, 550.0]),
    ("speakers-gallery", [180.0, 270.0, 360.0, 450.0]),
    ("speakers", [200.0, 300.0, 400.0, 500.0]),
    ("experience", [240.0, 360.0, 480.0, 600.0]),
    ("faq", [210.0, 315.0, 420.0, 525.0]),
    ("cta-section", [250.0, 375.0, 500.0, 625.0]),
    ("footer", [130.0, 195.0, 260.0, 325.0]),
    ("badge", [300.0, 420.0, 540.0, 660.0]),
];

pub fn section_chord(section: &str) -> Option<&'static [f32; 4]> {
    SECTION_CHORDS
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, chord)| chord)
}

/// Two-channel sample data, left/right always the same length.
pub struct StereoBuffer {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
}

impl StereoBuffer {
    fn silence(len: usize) -> Self {
        Self {
            left: vec![0.0; len],
            right: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// UI click: a short noise transient, six decaying echo copies, and a
/// damped 2 kHz sine ping, summed into one 2-second stereo buffer.
pub fn render_click(sample_rate: f32, seed: u64) -> StereoBuffer {
    let len = (sample_rate * CLICK_SECONDS) as usize;
    let mut buf = StereoBuffer::silence(len);
    let mut rng = StdRng::seed_from_u64(seed);

    // Sharp transient with linear decay
    for i in 0..TRANSIENT_SAMPLES.min(len) {
        let vol = 1.0 - i as f32 / TRANSIENT_SAMPLES as f32;
        let sig = rng.gen::<f32>() * vol * 0.5;
        buf.left[i] += sig;
        buf.right[i] += sig;
    }

    // Echo tail: transient-length noise bursts at fixed sample delays,
    // right channel trails slightly for width
    for &d in &ECHO_DELAYS {
        for i in 0..TRANSIENT_SAMPLES {
            if i + d >= len {
                break;
            }
            let val = rng.gen::<f32>() * 0.1;
            let decay = (-((i + d) as f32) / 10_000.0).exp();
            buf.left[i + d] += val * decay;
            if i + d + ECHO_RIGHT_OFFSET < len {
                buf.right[i + d + ECHO_RIGHT_OFFSET] += val * decay;
            }
        }
    }

    // Damped sine ping
    for i in 0..PING_SAMPLES.min(len) {
        let t = i as f32 / sample_rate;
        let sine = (t * PING_FREQ_HZ * 2.0 * PI).sin() * (-t * 20.0).exp();
        buf.left[i] += sine * 0.1;
        buf.right[i] += sine * 0.1;
    }

    buf
}

/// Scroll swoosh: a leaky integrator over white noise for soft
/// low-frequency air, shaped by a sine rise and cosine fall envelope.
pub fn render_wind(sample_rate: f32, seed: u64) -> Vec<f32> {
    let len = (sample_rate * WIND_SECONDS) as usize;
    let mut data = vec![0.0_f32; len];
    let mut rng = StdRng::seed_from_u64(seed);

    let mut last_out = 0.0_f32;
    for sample in data.iter_mut() {
        let white = rng.gen::<f32>() * 2.0 - 1.0;
        last_out = (last_out + 0.05 * white) / 1.05;
        *sample = last_out * 2.0;
    }

    for (i, sample) in data.iter_mut().enumerate() {
        let t = i as f32 / len as f32;
        let vol = if t < 0.3 {
            ((t / 0.3) * (PI / 2.0)).sin()
        } else {
            (((t - 0.3) / 0.7) * (PI / 2.0)).cos()
        };
        *sample *= vol * 0.1;
    }

    data
}

/// Seamless 4-second chord loop. Each frequency contributes a detuned
/// pair of sine partials (f and 1.01·f) for a slow chorus beat; short
/// linear fades at both ends keep the loop boundary click-free.
pub fn render_chord_loop(sample_rate: f32, freqs: &[f32], level: f32) -> StereoBuffer {
    let len = (sample_rate * LOOP_SECONDS) as usize;
    let mut buf = StereoBuffer::silence(len);

    let partials: SmallVec<[f32; 8]> = freqs
        .iter()
        .flat_map(|&f| [f, f * DETUNE_RATIO])
        .collect();

    for i in 0..len {
        let t = i as f32 / sample_rate;
        let mut sample = 0.0_f32;
        for &f in &partials {
            sample += (t * f * 2.0 * PI).sin() * level;
        }
        let env = if i < LOOP_FADE_SAMPLES {
            i as f32 / LOOP_FADE_SAMPLES as f32
        } else if i > len - LOOP_FADE_SAMPLES {
            (len - i) as f32 / LOOP_FADE_SAMPLES as f32
        } else {
            1.0
        };
        buf.left[i] = sample * env;
        buf.right[i] = sample * env;
    }

    buf
}
