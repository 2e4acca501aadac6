use crate::constants::{MUSIC_SRC, MUSIC_TOGGLE_ID};
use crate::dom;
use puffer_core::MusicState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background track, created lazily and started only from a user
/// gesture. All start/retry/mute intent lives in the pure `MusicState`;
/// this wrapper owns the element and the promise plumbing.
pub struct MusicPlayer {
    track: RefCell<Option<web::HtmlAudioElement>>,
    state: Rc<RefCell<MusicState>>,
    volume: f64,
}

impl MusicPlayer {
    pub fn new(volume: f64) -> Self {
        Self {
            track: RefCell::new(None),
            state: Rc::new(RefCell::new(MusicState::default())),
            volume,
        }
    }

    fn track(&self) -> Option<web::HtmlAudioElement> {
        let mut slot = self.track.borrow_mut();
        if slot.is_none() {
            match web::HtmlAudioElement::new_with_src(MUSIC_SRC) {
                Ok(el) => {
                    el.set_loop(true);
                    el.set_volume(self.volume);
                    *slot = Some(el);
                }
                Err(e) => {
                    log::warn!("background track unavailable: {:?}", e);
                    return None;
                }
            }
        }
        slot.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().is_playing()
    }

    /// A user gesture arrived; best-effort start unless the user muted or
    /// playback is already running.
    pub fn gesture(&self, autoplay: bool) {
        if self.state.borrow_mut().gesture_should_start(autoplay) {
            self.attempt_start();
        }
    }

    /// Flip playback from the toggle control. Returns the new state.
    pub fn toggle(&self) -> bool {
        let on = self.state.borrow_mut().toggle();
        if on {
            self.attempt_start();
        } else if let Some(track) = self.track() {
            let _ = track.pause();
        }
        on
    }

    fn attempt_start(&self) {
        let Some(track) = self.track() else {
            self.state.borrow_mut().start_failed();
            return;
        };
        match track.play() {
            Ok(promise) => {
                let state = self.state.clone();
                spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        // Autoplay policy refused; retry on the next gesture.
                        log::warn!("music playback blocked; waiting for another gesture");
                        state.borrow_mut().start_failed();
                        dom::set_pressed_class(MUSIC_TOGGLE_ID, false);
                    }
                });
            }
            Err(_) => {
                self.state.borrow_mut().start_failed();
                dom::set_pressed_class(MUSIC_TOGGLE_ID, false);
            }
        }
    }
}
