use crate::constants::*;
use web_sys as web;

/// Short oscillator sweeps played after an answer: rising when correct,
/// falling when wrong.
pub struct FeedbackTones {
    audio_ctx: web::AudioContext,
    master_gain: web::GainNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

impl FeedbackTones {
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master_gain = create_gain(&audio_ctx, 1.0, "Master")?;
        master_gain
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect error: {:?}", e))?;
        Ok(Self {
            audio_ctx,
            master_gain,
        })
    }

    pub fn play(&self, correct: bool) {
        // browsers keep the context suspended until a user gesture; submitting is one
        _ = self.audio_ctx.resume();
        let (from_hz, to_hz) = if correct {
            CORRECT_TONE_HZ
        } else {
            WRONG_TONE_HZ
        };
        if let Err(e) = self.one_shot(from_hz, to_hz) {
            log::warn!("[audio] feedback tone failed: {:?}", e);
        }
    }

    fn one_shot(&self, from_hz: f32, to_hz: f32) -> anyhow::Result<()> {
        let src = web::OscillatorNode::new(&self.audio_ctx)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        src.set_type(web::OscillatorType::Sine);
        let gain = create_gain(&self.audio_ctx, 0.0, "Tone")?;

        let t0 = self.audio_ctx.current_time() + 0.005;
        let t1 = t0 + TONE_DURATION_SEC;
        _ = src.frequency().set_value_at_time(from_hz, t0);
        _ = src.frequency().exponential_ramp_to_value_at_time(to_hz, t1);
        _ = gain.gain().set_value_at_time(0.0, t0);
        _ = gain
            .gain()
            .linear_ramp_to_value_at_time(TONE_PEAK_GAIN, t0 + TONE_ATTACK_SEC);
        _ = gain.gain().linear_ramp_to_value_at_time(0.0, t1);

        src.connect_with_audio_node(&gain)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        gain.connect_with_audio_node(&self.master_gain)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        src.start_with_when(t0).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        src.stop_with_when(t1 + 0.05)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(())
    }
}
