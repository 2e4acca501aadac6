// Interaction and effect tuning constants shared by the web frontend.

// Drag/tap disambiguation
pub const DRAG_THRESHOLD_PX: f32 = 6.0; // per-axis movement before a press counts as a drag

// Position clamping
pub const OVERSCROLL_FRACTION: f32 = 0.35; // of the sprite's own dimension, per axis

// Puff animation
pub const PUFF_DURATION_MS: i32 = 220;

// Particle bursts
pub const PARTICLE_BURST: usize = 10;
pub const PARTICLE_EDGE_MARGIN_PX: f32 = 30.0; // keep bubbles off the right edge
pub const PARTICLE_BOTTOM_MIN_PX: f32 = 20.0; // offset up from the viewport bottom
pub const PARTICLE_BOTTOM_SPAN_PX: f32 = 60.0; // random vertical spread above that
pub const PARTICLE_FLOAT_MIN_SEC: f32 = 4.5;
pub const PARTICLE_FLOAT_SPAN_SEC: f32 = 2.5;

// Background music
pub const MUSIC_VOLUME: f64 = 0.35;

// Share button confirmation
pub const SHARE_CONFIRM_MS: i32 = 900;
