// Host-side tests for centering and overscroll clamping.

use glam::Vec2;
use puffer_core::{centered_origin, clamp_axis, clamp_origin};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn centering_matches_formula() {
    let origin = centered_origin(Vec2::new(800.0, 600.0), Vec2::new(120.0, 100.0));
    assert_eq!(origin, Vec2::new((800.0 - 120.0) / 2.0, (600.0 - 100.0) / 2.0));
}

#[test]
fn centering_small_stage_goes_negative() {
    // A sprite larger than its stage centers with a negative origin rather
    // than pinning to a corner.
    let origin = centered_origin(Vec2::new(100.0, 100.0), Vec2::new(140.0, 120.0));
    assert_eq!(origin, Vec2::new(-20.0, -10.0));
}

#[test]
fn clamp_axis_is_identity_inside_range() {
    assert_eq!(clamp_axis(200.0, 800.0, 120.0, 0.35), 200.0);
}

#[test]
fn clamp_axis_allows_overscroll_past_edges() {
    let margin = 120.0 * 0.35;
    assert_eq!(clamp_axis(-1000.0, 800.0, 120.0, 0.35), -margin);
    assert_eq!(clamp_axis(1e6, 800.0, 120.0, 0.35), 800.0 - 120.0 + margin);
}

#[test]
fn clamp_axis_zero_overscroll_pins_to_stage() {
    assert_eq!(clamp_axis(-5.0, 800.0, 120.0, 0.0), 0.0);
    assert_eq!(clamp_axis(900.0, 800.0, 120.0, 0.0), 680.0);
}

#[test]
fn clamp_axis_tolerates_sprite_dwarfing_the_stage() {
    // Padded interval inverts (upper bound below lower); the result just
    // settles on the upper bound instead of panicking.
    let clamped = clamp_axis(50.0, 100.0, 400.0, 0.35);
    assert_eq!(clamped, 100.0 - 400.0 + 400.0 * 0.35);
}

#[test]
fn clamped_origin_stays_in_padded_bounds_for_any_input() {
    let stage = Vec2::new(640.0, 480.0);
    let sprite = Vec2::new(96.0, 84.0);
    let fraction = 0.35;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let target = Vec2::new(
            rng.gen_range(-5000.0..5000.0),
            rng.gen_range(-5000.0..5000.0),
        );
        let clamped = clamp_origin(target, stage, sprite, fraction);
        let mx = sprite.x * fraction;
        let my = sprite.y * fraction;
        assert!(clamped.x >= -mx && clamped.x <= stage.x - sprite.x + mx);
        assert!(clamped.y >= -my && clamped.y <= stage.y - sprite.y + my);
    }
}
