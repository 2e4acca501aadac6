use glam::Vec2;

/// Top-left origin that centers a sprite inside a stage.
#[inline]
pub fn centered_origin(stage: Vec2, sprite: Vec2) -> Vec2 {
    (stage - sprite) * 0.5
}

/// Clamp one axis of a sprite origin into the stage, with an overscroll
/// margin so the sprite can hang partly off the edge without disappearing.
///
/// The allowed interval is `[-m, stage_span - sprite_span + m]` where
/// `m = sprite_span * overscroll_fraction`. min-after-max ordering keeps
/// this total even when a huge sprite inverts the interval.
#[inline]
pub fn clamp_axis(value: f32, stage_span: f32, sprite_span: f32, overscroll_fraction: f32) -> f32 {
    let margin = sprite_span * overscroll_fraction;
    value.max(-margin).min(stage_span - sprite_span + margin)
}

/// Clamp a sprite origin on both axes.
#[inline]
pub fn clamp_origin(target: Vec2, stage: Vec2, sprite: Vec2, overscroll_fraction: f32) -> Vec2 {
    Vec2::new(
        clamp_axis(target.x, stage.x, sprite.x, overscroll_fraction),
        clamp_axis(target.y, stage.y, sprite.y, overscroll_fraction),
    )
}
