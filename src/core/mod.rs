pub mod constants;
pub mod gallery;
pub mod synth;

pub use constants::*;
pub use gallery::*;

// Shaders bundled as string constants
pub static WAVES_WGSL: &str = include_str!("../../shaders/waves.wgsl");
pub static REFRACTION_WGSL: &str = include_str!("../../shaders/refraction.wgsl");
pub static SNAKES_WGSL: &str = include_str!("../../shaders/snakes.wgsl");
