//! Envelope parameters for the tap sounds. The web frontend turns these into
//! WebAudio node graphs; keeping the numbers here keeps them testable.

/// Short descending sine "mwah": 520 Hz gliding down to 260 Hz under a
/// quick attack and an exponential release.
#[derive(Clone, Copy, Debug)]
pub struct KissTone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub peak_gain: f32,
    pub attack_sec: f64,
    pub glide_sec: f64,
    pub release_sec: f64,
}

impl Default for KissTone {
    fn default() -> Self {
        Self {
            start_hz: 520.0,
            end_hz: 260.0,
            peak_gain: 0.06,
            attack_sec: 0.03,
            glide_sec: 0.18,
            release_sec: 0.25,
        }
    }
}

/// Filtered-noise lip smack layered under the tone: a short noise buffer
/// through a highpass with an exponential amplitude decay.
#[derive(Clone, Copy, Debug)]
pub struct NoiseSmack {
    pub duration_sec: f64,
    pub highpass_hz: f32,
    pub peak_gain: f32,
}

impl Default for NoiseSmack {
    fn default() -> Self {
        Self {
            duration_sec: 0.09,
            highpass_hz: 1500.0,
            peak_gain: 0.25,
        }
    }
}

/// Deterministic white noise in [-1, 1] via xorshift32, used to fill the
/// smack's AudioBuffer without pulling an RNG into the audio path.
pub fn noise_samples(len: usize, seed: u32) -> Vec<f32> {
    let mut state = if seed == 0 { 0x1234_ABCD } else { seed };
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        out.push((state as f32 / u32::MAX as f32) * 2.0 - 1.0);
    }
    out
}
