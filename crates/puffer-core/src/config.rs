use crate::constants::*;

/// Tuning knobs for one widget instance.
///
/// The historical forks of this widget disagreed on the drag threshold and
/// overscroll fraction; those differences live here as configuration instead
/// of as separate copies of the code.
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// Fraction of the sprite's own dimension allowed past the stage edge.
    pub overscroll_fraction: f32,
    /// Per-axis movement (CSS px) before a press stops counting as a tap.
    pub drag_threshold_px: f32,
    /// Number of heart bubbles spawned per confirmed tap.
    pub particle_burst: usize,
    /// How long the sprite stays visually puffed after a tap.
    pub puff_duration_ms: i32,
    /// Background music volume, 0..=1.
    pub music_volume: f64,
    /// Start the looping track on the first user gesture.
    pub music_autoplay: bool,
    /// How long the share button shows its confirmation label.
    pub share_confirm_ms: i32,
    /// Whether tap sounds are synthesized at all.
    pub sound_enabled: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            overscroll_fraction: OVERSCROLL_FRACTION,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            particle_burst: PARTICLE_BURST,
            puff_duration_ms: PUFF_DURATION_MS,
            music_volume: MUSIC_VOLUME,
            music_autoplay: true,
            share_confirm_ms: SHARE_CONFIRM_MS,
            sound_enabled: true,
        }
    }
}
