use puffer_core::{noise_samples, KissTone, NoiseSmack};
use std::cell::{Cell, RefCell};
use web_sys as web;

/// Lazily-created shared AudioContext plus the tap-sound envelopes.
///
/// One context per page lifetime; it is first constructed inside a tap
/// gesture, so autoplay policy never blocks it.
pub struct SoundBank {
    context: RefCell<Option<web::AudioContext>>,
    kiss: KissTone,
    smack: NoiseSmack,
    noise_seed: Cell<u32>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self {
            context: RefCell::new(None),
            kiss: KissTone::default(),
            smack: NoiseSmack::default(),
            noise_seed: Cell::new(0x1234_ABCD),
        }
    }

    fn context(&self) -> Option<web::AudioContext> {
        let mut slot = self.context.borrow_mut();
        if slot.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => *slot = Some(ctx),
                Err(e) => {
                    log::warn!("AudioContext unavailable: {:?}", e);
                    return None;
                }
            }
        }
        slot.clone()
    }

    /// Fire the kiss-and-smack bundle. Scheduling failures are swallowed;
    /// a missing audio subsystem just means a silent tap.
    pub fn play_tap(&self) {
        let Some(ctx) = self.context() else {
            return;
        };
        // A suspended context (backgrounded tab) resumes inside the gesture.
        let _ = ctx.resume();
        play_kiss(&ctx, &self.kiss);
        let seed = self
            .noise_seed
            .get()
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.noise_seed.set(seed);
        play_smack(&ctx, &self.smack, seed);
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

// Descending sine "mwah": quick linear attack, exponential frequency glide,
// exponential release.
fn play_kiss(ctx: &web::AudioContext, tone: &KissTone) {
    let Ok(osc) = web::OscillatorNode::new(ctx) else {
        return;
    };
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency().set_value(tone.start_hz);

    let Ok(gain) = web::GainNode::new(ctx) else {
        return;
    };
    gain.gain().set_value(0.0001);

    let now = ctx.current_time();
    let _ = gain
        .gain()
        .linear_ramp_to_value_at_time(tone.peak_gain, now + tone.attack_sec);
    let _ = osc
        .frequency()
        .exponential_ramp_to_value_at_time(tone.end_hz, now + tone.glide_sec);
    let _ = gain
        .gain()
        .exponential_ramp_to_value_at_time(0.0001, now + tone.release_sec);

    let _ = osc.connect_with_audio_node(&gain);
    let _ = gain.connect_with_audio_node(&ctx.destination());
    let _ = osc.start();
    let _ = osc.stop_with_when(now + tone.release_sec + 0.01);
}

// Filtered-noise lip smack: a short noise buffer through a highpass with an
// exponential amplitude decay.
fn play_smack(ctx: &web::AudioContext, smack: &NoiseSmack, seed: u32) {
    let sample_rate = ctx.sample_rate();
    let len = (sample_rate as f64 * smack.duration_sec).ceil() as u32;
    let Ok(buffer) = ctx.create_buffer(1, len.max(1), sample_rate) else {
        return;
    };
    let mut samples = noise_samples(len.max(1) as usize, seed);
    let _ = buffer.copy_to_channel(&mut samples, 0);

    let Ok(source) = web::AudioBufferSourceNode::new(ctx) else {
        return;
    };
    source.set_buffer(Some(&buffer));

    let Ok(filter) = web::BiquadFilterNode::new(ctx) else {
        return;
    };
    filter.set_type(web::BiquadFilterType::Highpass);
    filter.frequency().set_value(smack.highpass_hz);

    let Ok(gain) = web::GainNode::new(ctx) else {
        return;
    };
    let now = ctx.current_time();
    let _ = gain.gain().set_value_at_time(smack.peak_gain, now);
    let _ = gain
        .gain()
        .exponential_ramp_to_value_at_time(0.0001, now + smack.duration_sec);

    let _ = source.connect_with_audio_node(&filter);
    let _ = filter.connect_with_audio_node(&gain);
    let _ = gain.connect_with_audio_node(&ctx.destination());
    let _ = source.start();
}
