use crate::audio::SoundBank;
use crate::constants::PUFFED_CLASS;
use crate::music::MusicPlayer;
use crate::{dom, particles};
use glam::Vec2;
use puffer_core::{
    centered_origin, clamp_origin, heart_burst, ReleaseOutcome, SpriteInteraction, WidgetConfig,
};
use rand::{rngs::StdRng, SeedableRng};
use std::cell::{Cell, RefCell};
use web_sys as web;

/// The one controller instance behind the widget: owns the sprite position,
/// the tap/drag state machine, and the audio handles. Everything the old
/// page-global mutable state used to be lives here.
pub struct SpriteWidget {
    sprite: web::HtmlElement,
    stage: web::HtmlElement,
    config: WidgetConfig,
    interaction: RefCell<SpriteInteraction>,
    sound_enabled: Cell<bool>,
    sounds: SoundBank,
    music: MusicPlayer,
    rng: RefCell<StdRng>,
}

impl SpriteWidget {
    pub fn new(sprite: web::HtmlElement, stage: web::HtmlElement, config: WidgetConfig) -> Self {
        let interaction = SpriteInteraction::new(config.drag_threshold_px);
        let music = MusicPlayer::new(config.music_volume);
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self {
            sprite,
            stage,
            sound_enabled: Cell::new(config.sound_enabled),
            interaction: RefCell::new(interaction),
            sounds: SoundBank::new(),
            music,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
            config,
        }
    }

    pub fn sprite(&self) -> &web::HtmlElement {
        &self.sprite
    }

    pub fn stage(&self) -> &web::HtmlElement {
        &self.stage
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn music(&self) -> &MusicPlayer {
        &self.music
    }

    /// Center the sprite in its stage; called on load and on every resize.
    pub fn center(&self) {
        let stage = dom::client_size(&self.stage);
        let sprite = dom::offset_size(&self.sprite);
        dom::set_origin(&self.sprite, centered_origin(stage, sprite));
    }

    /// Pointer/touch down at viewport coordinates.
    pub fn press(&self, client: Vec2) {
        let stage_origin = dom::client_origin(&self.stage);
        let sprite_origin = dom::client_origin(&self.sprite) - stage_origin;
        self.interaction
            .borrow_mut()
            .press(client - stage_origin, sprite_origin);
    }

    pub fn is_pressed(&self) -> bool {
        self.interaction.borrow().is_active()
    }

    /// Pointer/touch moved; repositions the sprite while pressed.
    pub fn drag_to(&self, client: Vec2) {
        let stage_origin = dom::client_origin(&self.stage);
        let desired = self.interaction.borrow_mut().drag(client - stage_origin);
        if let Some(desired) = desired {
            let stage = dom::client_size(&self.stage);
            let sprite = dom::offset_size(&self.sprite);
            let clamped = clamp_origin(desired, stage, sprite, self.config.overscroll_fraction);
            dom::set_origin(&self.sprite, clamped);
        }
    }

    /// Pointer/touch released; a press that never moved fires the effects.
    pub fn release(&self) {
        if self.interaction.borrow_mut().release() == Some(ReleaseOutcome::Tap) {
            self.tap_effects();
        }
    }

    pub fn cancel(&self) {
        self.interaction.borrow_mut().cancel();
    }

    /// New playback state of the tap-sound toggle.
    pub fn toggle_sound(&self) -> bool {
        let enabled = !self.sound_enabled.get();
        self.sound_enabled.set(enabled);
        enabled
    }

    /// Called from every qualifying user gesture so blocked autoplay gets
    /// retried without any scheduling of our own. An explicit pause from
    /// the toggle is respected; gestures never undo it.
    pub fn music_gesture(&self) {
        self.music.gesture(self.config.music_autoplay);
    }

    // Three independent fire-and-forget effects; none depends on another.
    fn tap_effects(&self) {
        self.puff();
        if self.sound_enabled.get() {
            self.sounds.play_tap();
        }
        self.spawn_hearts();
    }

    fn puff(&self) {
        let _ = self.sprite.class_list().add_1(PUFFED_CLASS);
        if let Some(window) = web::window() {
            let sprite = self.sprite.clone();
            dom::set_timeout_once(&window, self.config.puff_duration_ms, move || {
                let _ = sprite.class_list().remove_1(PUFFED_CLASS);
            });
        }
    }

    fn spawn_hearts(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let specs = heart_burst(
            self.config.particle_burst,
            dom::viewport_size(),
            &mut *self.rng.borrow_mut(),
        );
        particles::spawn_burst(&document, &self.stage, &specs);
    }
}
