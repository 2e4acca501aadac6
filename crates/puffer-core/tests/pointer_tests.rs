// Host-side tests for the tap/drag state machine.

use glam::Vec2;
use puffer_core::{ReleaseOutcome, SpriteInteraction};

#[test]
fn small_movement_confirms_tap() {
    // Press at (100,100) on a sprite whose top-left is (90,90),
    // release at (101,101): one pixel of travel is a tap.
    let mut interaction = SpriteInteraction::new(6.0);
    interaction.press(Vec2::new(100.0, 100.0), Vec2::new(90.0, 90.0));
    let origin = interaction.drag(Vec2::new(101.0, 101.0)).unwrap();
    assert_eq!(origin, Vec2::new(91.0, 91.0));
    assert_eq!(interaction.release(), Some(ReleaseOutcome::Tap));
    assert!(!interaction.is_active());
}

#[test]
fn horizontal_drag_past_threshold_suppresses_tap() {
    let mut interaction = SpriteInteraction::new(6.0);
    interaction.press(Vec2::new(100.0, 100.0), Vec2::new(90.0, 90.0));
    // Moving 40px right shifts the desired origin by 40px, pre-clamp.
    let origin = interaction.drag(Vec2::new(140.0, 100.0)).unwrap();
    assert_eq!(origin, Vec2::new(130.0, 90.0));
    assert_eq!(interaction.release(), Some(ReleaseOutcome::Drag));
}

#[test]
fn vertical_movement_alone_counts_as_drag() {
    let mut interaction = SpriteInteraction::new(6.0);
    interaction.press(Vec2::new(50.0, 50.0), Vec2::new(40.0, 40.0));
    interaction.drag(Vec2::new(50.0, 60.0));
    assert_eq!(interaction.release(), Some(ReleaseOutcome::Drag));
}

#[test]
fn movement_at_threshold_is_still_a_tap() {
    // The test is strict: exactly the threshold does not latch.
    let mut interaction = SpriteInteraction::new(6.0);
    interaction.press(Vec2::new(0.0, 0.0), Vec2::ZERO);
    interaction.drag(Vec2::new(6.0, 6.0));
    assert_eq!(interaction.release(), Some(ReleaseOutcome::Tap));
}

#[test]
fn moved_flag_latches_even_after_returning_to_start() {
    let mut interaction = SpriteInteraction::new(6.0);
    interaction.press(Vec2::new(100.0, 100.0), Vec2::new(90.0, 90.0));
    interaction.drag(Vec2::new(130.0, 100.0));
    interaction.drag(Vec2::new(100.0, 100.0));
    assert_eq!(interaction.release(), Some(ReleaseOutcome::Drag));
}

#[test]
fn cancel_fires_no_outcome() {
    let mut interaction = SpriteInteraction::new(6.0);
    interaction.press(Vec2::new(10.0, 10.0), Vec2::ZERO);
    interaction.cancel();
    assert!(!interaction.is_active());
    assert_eq!(interaction.release(), None);
}

#[test]
fn release_without_press_is_ignored() {
    let mut interaction = SpriteInteraction::new(6.0);
    assert_eq!(interaction.release(), None);
    assert!(interaction.drag(Vec2::new(5.0, 5.0)).is_none());
}

#[test]
fn drag_tracks_grab_offset_not_pointer() {
    // Grabbing the sprite near its bottom-right corner keeps that corner
    // under the pointer for the whole drag.
    let mut interaction = SpriteInteraction::new(6.0);
    interaction.press(Vec2::new(120.0, 115.0), Vec2::new(90.0, 90.0));
    let origin = interaction.drag(Vec2::new(220.0, 215.0)).unwrap();
    assert_eq!(origin, Vec2::new(190.0, 190.0));
}

#[test]
fn new_press_replaces_stale_session() {
    let mut interaction = SpriteInteraction::new(6.0);
    interaction.press(Vec2::new(0.0, 0.0), Vec2::ZERO);
    interaction.drag(Vec2::new(50.0, 0.0));
    // A fresh press (e.g. second finger after a lost pointerup) starts clean.
    interaction.press(Vec2::new(200.0, 200.0), Vec2::new(195.0, 195.0));
    assert_eq!(interaction.release(), Some(ReleaseOutcome::Tap));
}
