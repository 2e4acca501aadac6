use crate::constants::{
    PARTICLE_BOTTOM_MIN_PX, PARTICLE_BOTTOM_SPAN_PX, PARTICLE_EDGE_MARGIN_PX,
    PARTICLE_FLOAT_MIN_SEC, PARTICLE_FLOAT_SPAN_SEC,
};
use glam::Vec2;
use rand::Rng;

/// Heart colors, one picked at random per bubble.
pub const HEART_PALETTE: [&str; 4] = ["#ff7fa3", "#ff95b8", "#ff6f91", "#ff8fab"];

/// Everything the frontend needs to materialize one bubble element.
#[derive(Clone, Copy, Debug)]
pub struct ParticleSpec {
    /// Viewport-relative left, px.
    pub x: f32,
    /// Viewport-relative top, px; near the bottom edge.
    pub y: f32,
    pub color: &'static str,
    /// Float animation duration, seconds.
    pub duration_sec: f32,
}

/// Generate one tap's worth of bubbles, scattered along the bottom of the
/// viewport with randomized colors and float durations.
pub fn heart_burst(count: usize, viewport: Vec2, rng: &mut impl Rng) -> Vec<ParticleSpec> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.gen::<f32>() * (viewport.x - PARTICLE_EDGE_MARGIN_PX).max(0.0);
        let y = viewport.y - PARTICLE_BOTTOM_MIN_PX - rng.gen::<f32>() * PARTICLE_BOTTOM_SPAN_PX;
        let color = HEART_PALETTE[rng.gen_range(0..HEART_PALETTE.len())];
        let duration_sec = PARTICLE_FLOAT_MIN_SEC + rng.gen::<f32>() * PARTICLE_FLOAT_SPAN_SEC;
        out.push(ParticleSpec {
            x,
            y,
            color,
            duration_sec,
        });
    }
    out
}
