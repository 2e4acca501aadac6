//! Playback intent for the looping background track, kept pure so the
//! gesture/retry/mute rules are host-testable.

/// Distinguishes "the platform blocked the start, retry on the next
/// gesture" from "the user turned music off": a blocked start clears the
/// playing flag but not the mute latch, and only gestures while unmuted
/// may start playback.
#[derive(Clone, Copy, Debug, Default)]
pub struct MusicState {
    playing: bool,
    user_muted: bool,
}

impl MusicState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// A user gesture arrived. True when a start attempt should be made;
    /// the state flips to playing optimistically and reverts through
    /// `start_failed` when the platform refuses.
    pub fn gesture_should_start(&mut self, autoplay: bool) -> bool {
        if !autoplay || self.user_muted || self.playing {
            return false;
        }
        self.playing = true;
        true
    }

    /// The platform refused playback; revert so the next gesture retries.
    pub fn start_failed(&mut self) {
        self.playing = false;
    }

    /// The music control was clicked. Returns the new desired state:
    /// `true` means a start attempt should follow, `false` means pause.
    /// Pausing sets the mute latch; turning back on clears it.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.playing = false;
            self.user_muted = true;
            false
        } else {
            self.user_muted = false;
            self.playing = true;
            true
        }
    }
}
