/// Wiring and timing constants for the wasm frontend.
///
/// These express intended behavior (debounce windows, ramp times, gain
/// levels) and keep magic numbers out of the code.
// Element hooks the page markup must provide; components missing their
// element log a warning and stay inactive.
pub const PAGE_CANVAS_ID: &str = "webgl-canvas";
pub const GALLERY_CANVAS_ID: &str = "gallery-bg-canvas";
pub const GALLERY_CONTAINER_ID: &str = "circular-gallery";
pub const PIN_WRAPPER_CLASS: &str = "gallery-pin-wrapper";
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle-btn";
pub const BADGE_MODAL_ID: &str = "open-badge-modal";
pub const BACKDROP_PRESET_ATTR: &str = "data-backdrop";

// Scroll idle window before the gallery falls back to auto-rotation
pub const SCROLL_IDLE_MS: i32 = 150;
// Section-ambient scan debounce
pub const SECTION_SCAN_MS: i32 = 200;

// Master output level
pub const MASTER_LEVEL: f32 = 0.5;

// Wind loop: gain ramp on start/stop, teardown shortly after the ramp
// completes so the disconnect never clicks
pub const WIND_RAMP_SEC: f64 = 0.5;
pub const WIND_TEARDOWN_MS: i32 = 600;

// Drone loop
pub const DRONE_LEVEL: f32 = 0.3;
pub const DRONE_FADE_IN_SEC: f64 = 3.0;
pub const DRONE_FADE_OUT_SEC: f64 = 1.0;
pub const DRONE_TEARDOWN_MS: i32 = 1100;

// Section ambient crossfade: the 2 s overlap of old and new voices is
// intentional; only one voice remains audible at steady state
pub const AMBIENT_LEVEL: f32 = 0.2;
pub const AMBIENT_FADE_SEC: f64 = 2.0;
pub const AMBIENT_TEARDOWN_MS: i32 = 2100;

// Deterministic seeds for the noise-based buffers
pub const CLICK_SEED: u64 = 0x1234_ABCD;
pub const WIND_SEED: u64 = 0x7890_FEDC;

// Shader clock runs slower than wall time for a calmer drift
pub const SHADER_TIME_SCALE: f32 = 0.6;
