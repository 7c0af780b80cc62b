//! Short Web Audio tones for UI feedback.

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::error::PortfolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Click,
    Toggle,
    Success,
    Error,
}

impl Tone {
    pub fn frequency_hz(self) -> f32 {
        match self {
            Tone::Click => 880.0,
            Tone::Toggle => 660.0,
            Tone::Success => 1046.5,
            Tone::Error => 220.0,
        }
    }

    pub fn duration_secs(self) -> f64 {
        match self {
            Tone::Click | Tone::Toggle => 0.06,
            Tone::Success | Tone::Error => 0.18,
        }
    }

    fn waveform(self) -> OscillatorType {
        match self {
            Tone::Error => OscillatorType::Square,
            _ => OscillatorType::Sine,
        }
    }
}

const PEAK_GAIN: f32 = 0.05;

thread_local! {
    // One context per page; browsers cap how many may exist.
    static CONTEXT: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

fn with_context<T>(
    f: impl FnOnce(&AudioContext) -> Result<T, PortfolioError>,
) -> Result<T, PortfolioError> {
    CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let ctx = AudioContext::new().map_err(|_| PortfolioError::Unavailable("Web Audio"))?;
            *slot = Some(ctx);
        }
        match slot.as_ref() {
            Some(ctx) => f(ctx),
            None => Err(PortfolioError::Unavailable("Web Audio")),
        }
    })
}

fn js(op: &'static str) -> impl Fn(JsValue) -> PortfolioError {
    move |e| PortfolioError::js(op, e)
}

fn schedule(ctx: &AudioContext, tone: Tone) -> Result<(), PortfolioError> {
    let osc = ctx.create_oscillator().map_err(js("createOscillator"))?;
    let gain = ctx.create_gain().map_err(js("createGain"))?;
    osc.set_type(tone.waveform());
    osc.frequency().set_value(tone.frequency_hz());

    let now = ctx.current_time();
    let end = now + tone.duration_secs();
    gain.gain().set_value(PEAK_GAIN);
    gain.gain()
        .exponential_ramp_to_value_at_time(0.0001, end)
        .map_err(js("exponentialRampToValueAtTime"))?;

    osc.connect_with_audio_node(&gain).map_err(js("connect"))?;
    gain.connect_with_audio_node(&ctx.destination())
        .map_err(js("connect"))?;
    osc.start().map_err(js("start"))?;
    osc.stop_with_when(end).map_err(js("stop"))?;
    Ok(())
}

/// Play `tone` if sound is enabled. Failures only log; sound is decoration.
pub fn play(tone: Tone, enabled: bool) {
    if !enabled {
        return;
    }
    if let Err(e) = with_context(|ctx| schedule(ctx, tone)) {
        log::debug!("Skipping {:?} tone: {}", tone, e);
    }
}
