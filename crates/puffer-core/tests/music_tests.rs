// Host-side tests for background-music playback intent.

use puffer_core::MusicState;

#[test]
fn first_gesture_starts_playback_once() {
    let mut state = MusicState::default();
    assert!(state.gesture_should_start(true));
    assert!(state.is_playing());
    // Already playing; later gestures are no-ops.
    assert!(!state.gesture_should_start(true));
}

#[test]
fn autoplay_off_means_gestures_never_start() {
    let mut state = MusicState::default();
    assert!(!state.gesture_should_start(false));
    assert!(!state.is_playing());
}

#[test]
fn blocked_start_retries_on_the_next_gesture() {
    let mut state = MusicState::default();
    assert!(state.gesture_should_start(true));
    state.start_failed();
    assert!(!state.is_playing());
    assert!(state.gesture_should_start(true));
}

#[test]
fn user_pause_survives_later_gestures() {
    // Pausing via the toggle must not be undone by the next tap anywhere
    // on the page; only a platform-blocked start is retried.
    let mut state = MusicState::default();
    assert!(state.gesture_should_start(true));
    assert!(!state.toggle());
    assert!(!state.is_playing());
    assert!(!state.gesture_should_start(true));
    assert!(!state.gesture_should_start(true));
}

#[test]
fn toggling_back_on_clears_the_mute_latch() {
    let mut state = MusicState::default();
    assert!(state.gesture_should_start(true));
    assert!(!state.toggle());
    assert!(state.toggle());
    assert!(state.is_playing());
    // A blocked restart still retries on the next gesture.
    state.start_failed();
    assert!(state.gesture_should_start(true));
}

#[test]
fn toggle_from_idle_requests_a_start() {
    let mut state = MusicState::default();
    assert!(state.toggle());
    assert!(state.is_playing());
}
