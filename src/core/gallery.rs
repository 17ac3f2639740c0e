// Pure rotation and scroll-progress math for the circular speaker gallery.
// DOM and GPU concerns live elsewhere; everything here runs on the host
// so it can be tested without a browser.

// Ring layout
pub const GALLERY_RADIUS_PX: f32 = 400.0; // translateZ distance for each card

// Rotation behavior
pub const AUTO_ROTATE_SPEED_DEG: f32 = 0.1; // degrees added to the target per idle frame
pub const SMOOTHING_ALPHA: f32 = 0.05; // fraction of remaining distance covered per frame
pub const ROTATION_SPAN_DEG: f32 = 720.0; // two full turns across the scroll range

// Depth cue: angular distance (deg) at which opacity/scale reach their floors
pub const OPACITY_FALLOFF_DEG: f32 = 120.0;
pub const OPACITY_FLOOR: f32 = 0.1;
pub const SCALE_FALLOFF_DEG: f32 = 360.0;
pub const SCALE_FLOOR: f32 = 0.7;

/// Where scroll progress is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressSource {
    /// Position within a pinned wrapper's scroll space.
    PinnedWrapper,
    /// Position within the whole document's scroll range.
    Document,
}

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub radius_px: f32,
    pub auto_rotate_speed_deg: f32,
    pub smoothing_alpha: f32,
    pub rotation_span_deg: f32,
    pub progress_source: ProgressSource,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            radius_px: GALLERY_RADIUS_PX,
            auto_rotate_speed_deg: AUTO_ROTATE_SPEED_DEG,
            smoothing_alpha: SMOOTHING_ALPHA,
            rotation_span_deg: ROTATION_SPAN_DEG,
            progress_source: ProgressSource::PinnedWrapper,
        }
    }
}

/// Current and target rotation of the card ring, advanced once per frame.
#[derive(Clone, Debug)]
pub struct GalleryState {
    pub config: GalleryConfig,
    pub rotation_deg: f32,
    pub target_deg: f32,
}

impl GalleryState {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            rotation_deg: 0.0,
            target_deg: 0.0,
        }
    }

    /// Feed the latest scroll-progress sample; drives the rotation target.
    pub fn set_progress(&mut self, progress: f32) {
        let p = progress.clamp(0.0, 1.0);
        self.target_deg = p * self.config.rotation_span_deg;
    }

    /// Advance one animation frame. While no scroll is active the target
    /// keeps drifting so the ring never sits still.
    pub fn tick(&mut self, scrolling: bool) {
        if !scrolling {
            self.target_deg += self.config.auto_rotate_speed_deg;
        }
        self.rotation_deg += (self.target_deg - self.rotation_deg) * self.config.smoothing_alpha;
    }
}

/// Normalized position within a scroll range, clamped to [0, 1].
/// A zero or negative range yields 0 (wrapper shorter than the viewport).
pub fn scroll_progress(scroll_y: f64, range_top: f64, range_len: f64) -> f32 {
    if range_len <= 0.0 {
        return 0.0;
    }
    (((scroll_y - range_top) / range_len) as f32).clamp(0.0, 1.0)
}

/// Fixed angular spacing of the ring's cards.
pub fn angle_per_item(count: usize) -> f32 {
    360.0 / count.max(1) as f32
}

/// Per-frame presentation of one card: its fixed ring angle plus the
/// opacity/scale depth cue derived from the current stage rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub angle_deg: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// Cards facing the viewer are opaque and full-size; cards around the
/// back fade toward the opacity floor and shrink toward the scale floor.
pub fn card_pose(index: usize, count: usize, rotation_deg: f32) -> CardPose {
    let item_angle = index as f32 * angle_per_item(count);
    // Angle relative to the front (0 deg), folded to [0, 180] for wraparound
    let relative = (item_angle + rotation_deg % 360.0 + 360.0) % 360.0;
    let normalized = if relative > 180.0 {
        360.0 - relative
    } else {
        relative
    };
    CardPose {
        angle_deg: item_angle,
        opacity: (1.0 - normalized / OPACITY_FALLOFF_DEG).max(OPACITY_FLOOR),
        scale: (1.0 - normalized / SCALE_FALLOFF_DEG).max(SCALE_FLOOR),
    }
}
