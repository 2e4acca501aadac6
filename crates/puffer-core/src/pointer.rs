use glam::Vec2;

/// What a finished press turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Movement never exceeded the threshold; the effect bundle should fire.
    Tap,
    /// The sprite was dragged; no effects.
    Drag,
}

/// Transient state for one press, created on pointer-down and destroyed on
/// release or cancel.
#[derive(Clone, Copy, Debug)]
struct PointerSession {
    start: Vec2,
    grab_offset: Vec2,
    moved: bool,
}

/// Tap/drag disambiguation state machine: `idle -> pressed -> idle`.
///
/// While pressed, `drag` reports the desired (pre-clamp) sprite origin and
/// latches the moved flag once movement exceeds the threshold on either
/// axis. The latch is one-way: wandering back under the threshold does not
/// turn a drag back into a tap.
#[derive(Debug)]
pub struct SpriteInteraction {
    session: Option<PointerSession>,
    threshold_px: f32,
}

impl SpriteInteraction {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            session: None,
            threshold_px,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a press. A second press while one is active replaces it.
    pub fn press(&mut self, pointer: Vec2, sprite_origin: Vec2) {
        self.session = Some(PointerSession {
            start: pointer,
            grab_offset: pointer - sprite_origin,
            moved: false,
        });
    }

    /// Pointer moved while pressed. Returns the desired sprite origin before
    /// clamping, or `None` when no press is active.
    pub fn drag(&mut self, pointer: Vec2) -> Option<Vec2> {
        let session = self.session.as_mut()?;
        let delta = pointer - session.start;
        if delta.x.abs() > self.threshold_px || delta.y.abs() > self.threshold_px {
            session.moved = true;
        }
        Some(pointer - session.grab_offset)
    }

    /// Pointer released. Returns `None` when no press was active.
    pub fn release(&mut self) -> Option<ReleaseOutcome> {
        self.session.take().map(|s| {
            if s.moved {
                ReleaseOutcome::Drag
            } else {
                ReleaseOutcome::Tap
            }
        })
    }

    /// Pointer capture lost or the gesture was cancelled; no effects fire.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
