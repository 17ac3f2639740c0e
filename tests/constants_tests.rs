// Sanity checks over the wiring constants and static page data. These
// catch accidental edits that would silently break timing relationships
// the runtime code relies on.

#![allow(dead_code)]
mod gallery {
    include!("../src/core/gallery.rs");
}
mod speakers {
    include!("../src/core/constants.rs");
}
mod timing {
    include!("../src/constants.rs");
}

use timing::*;

#[test]
fn smoothing_and_rotation_constants_are_sane() {
    assert!(gallery::SMOOTHING_ALPHA > 0.0 && gallery::SMOOTHING_ALPHA <= 1.0);
    assert!(gallery::AUTO_ROTATE_SPEED_DEG > 0.0);
    assert!(gallery::GALLERY_RADIUS_PX > 0.0);
    // Two full turns across the scroll range
    assert_eq!(gallery::ROTATION_SPAN_DEG, 720.0);
}

#[test]
fn depth_cue_floors_leave_cards_visible() {
    assert!(gallery::OPACITY_FLOOR > 0.0 && gallery::OPACITY_FLOOR < 1.0);
    assert!(gallery::SCALE_FLOOR > 0.0 && gallery::SCALE_FLOOR < 1.0);
    assert!(gallery::OPACITY_FALLOFF_DEG > 0.0);
    // Opacity drops off faster than scale so depth reads before size
    assert!(gallery::OPACITY_FALLOFF_DEG < gallery::SCALE_FALLOFF_DEG);
}

#[test]
fn teardowns_outlast_their_fades() {
    // A voice must never be disconnected while its gain is still ramping
    assert!(f64::from(WIND_TEARDOWN_MS) > WIND_RAMP_SEC * 1000.0);
    assert!(f64::from(DRONE_TEARDOWN_MS) > DRONE_FADE_OUT_SEC * 1000.0);
    assert!(f64::from(AMBIENT_TEARDOWN_MS) > AMBIENT_FADE_SEC * 1000.0);
}

#[test]
fn gain_levels_stay_in_range() {
    for level in [MASTER_LEVEL, DRONE_LEVEL, AMBIENT_LEVEL] {
        assert!(level > 0.0 && level <= 1.0);
    }
    assert!(SCROLL_IDLE_MS > 0);
    assert!(SECTION_SCAN_MS > 0);
    assert!(SHADER_TIME_SCALE > 0.0);
}

#[test]
fn dom_hooks_are_distinct() {
    let ids = [
        PAGE_CANVAS_ID,
        GALLERY_CANVAS_ID,
        GALLERY_CONTAINER_ID,
        AUDIO_TOGGLE_ID,
    ];
    for (i, id) in ids.iter().enumerate() {
        assert!(!id.is_empty());
        assert!(ids[..i].iter().all(|other| other != id));
    }
    assert!(BACKDROP_PRESET_ATTR.starts_with("data-"));
}

#[test]
fn speaker_table_fills_the_ring() {
    assert!(!speakers::SPEAKERS.is_empty());
    for (i, s) in speakers::SPEAKERS.iter().enumerate() {
        assert!(!s.name.is_empty());
        assert!(!s.role.is_empty());
        assert!(!s.topic.is_empty());
        assert!(speakers::SPEAKERS[..i].iter().all(|o| o.name != s.name));
    }
    // Four speakers land on the quarter points of the ring
    let spacing = gallery::angle_per_item(speakers::SPEAKERS.len());
    assert_eq!(spacing, 90.0);
}
