//! Flap sound cue
//!
//! Audio is fire-and-forget: the simulation calls [`AudioCue::flap`] and never
//! learns whether anything played. On the web the cue is synthesised with the
//! Web Audio API, no sound files needed.

/// Sound collaborator triggered on every flap (start or jump)
pub trait AudioCue {
    fn flap(&mut self);
}

/// No sound at all (native/headless)
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioCue for Silent {
    fn flap(&mut self) {}
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudioCue;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::AudioCue;

    /// Web Audio flap cue: a short two-note cluck
    pub struct WebAudioCue {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl WebAudioCue {
        /// `volume` in 0.0 - 1.0; zero keeps the cue silent
        pub fn new(volume: f32) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: volume.clamp(0.0, 1.0),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }

    impl AudioCue for WebAudioCue {
        fn flap(&mut self) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers suspend the context until a user gesture; a flap is one
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            for (i, freq) in [520.0, 780.0].iter().enumerate() {
                let delay = i as f64 * 0.05;
                if let Some((osc, gain)) = Self::create_osc(ctx, *freq, OscillatorType::Square) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.15, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.06)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.08).ok();
                }
            }
        }
    }
}
