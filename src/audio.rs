use crate::constants::*;
use crate::core::synth;
use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A live looped source with its own gain, so it can fade independently
/// of the master bus.
struct LoopVoice {
    source: web::AudioBufferSourceNode,
    gain: web::GainNode,
}

/// Procedural audio engine: pre-renders every buffer at init and plays
/// them through a single master gain. Starts muted; all playback calls
/// are no-ops until `init` has run and `toggle` has unmuted, which is
/// the normal path under browser autoplay policies.
pub struct AudioEngine {
    ctx: Option<web::AudioContext>,
    master: Option<web::GainNode>,
    buffers: FnvHashMap<String, web::AudioBuffer>,
    muted: bool,
    wind: Option<LoopVoice>,
    drone: Option<LoopVoice>,
    ambient: Option<LoopVoice>,
    current_section: Option<String>,
}

impl AudioEngine {
    pub fn new() -> Self {
        Self {
            ctx: None,
            master: None,
            buffers: FnvHashMap::default(),
            muted: true,
            wind: None,
            drone: None,
            ambient: None,
            current_section: None,
        }
    }

    pub fn is_audible(&self) -> bool {
        !self.muted
    }

    /// Create the context and pre-render every buffer. Idempotent: later
    /// calls return immediately. A failed context leaves the engine
    /// inert rather than erroring.
    pub fn init(&mut self) {
        if self.ctx.is_some() {
            return;
        }
        let ctx = match web::AudioContext::new() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("AudioContext unavailable: {:?}", e);
                return;
            }
        };
        let master = match web::GainNode::new(&ctx) {
            Ok(g) => g,
            Err(e) => {
                log::error!("master GainNode error: {:?}", e);
                return;
            }
        };
        master.gain().set_value(MASTER_LEVEL);
        let _ = master.connect_with_audio_node(&ctx.destination());

        let sr = ctx.sample_rate();
        if let Some(b) = upload_stereo(&ctx, synth::render_click(sr, CLICK_SEED)) {
            self.buffers.insert("click".to_string(), b);
        }
        if let Some(b) = upload_mono(&ctx, synth::render_wind(sr, WIND_SEED)) {
            self.buffers.insert("wind".to_string(), b);
        }
        if let Some(b) = upload_stereo(
            &ctx,
            synth::render_chord_loop(sr, &synth::DRONE_CHORD, synth::DRONE_PARTIAL_LEVEL),
        ) {
            self.buffers.insert("drone".to_string(), b);
        }
        for (name, chord) in synth::SECTION_CHORDS {
            let loop_buf = synth::render_chord_loop(sr, chord, synth::AMBIENT_PARTIAL_LEVEL);
            if let Some(b) = upload_stereo(&ctx, loop_buf) {
                self.buffers.insert(format!("ambient_{name}"), b);
            }
        }
        log::info!("[audio] {} buffers pre-rendered at {} Hz", self.buffers.len(), sr);

        self.ctx = Some(ctx);
        self.master = Some(master);
    }

    /// Flip the mute state, lazily initializing on first use. Unmuting
    /// resumes a suspended context, brings the drone up and plays a
    /// click; muting fades every loop out. Returns the new audible state.
    pub fn toggle(&mut self) -> bool {
        if self.ctx.is_none() {
            self.init();
        }
        // Context creation failed: stay muted rather than reporting an
        // audible state the engine cannot deliver
        let ctx = match &self.ctx {
            Some(c) => c,
            None => return false,
        };
        if ctx.state() == web::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        self.muted = !self.muted;
        if self.muted {
            self.stop_drone();
            self.stop_wind();
            self.stop_ambient();
        } else {
            self.start_drone();
            self.play_click();
        }
        !self.muted
    }

    /// One-shot click into the master bus; no-op when muted or before init.
    pub fn play_click(&self) {
        if self.muted {
            return;
        }
        let (ctx, master) = match self.graph() {
            Some(g) => g,
            None => return,
        };
        let buffer = match self.buffers.get("click") {
            Some(b) => b,
            None => return,
        };
        let src = match ctx.create_buffer_source() {
            Ok(s) => s,
            Err(_) => return,
        };
        src.set_buffer(Some(buffer));
        let _ = src.connect_with_audio_node(master);
        let _ = src.start();
    }

    /// Start the continuous scroll-wind loop with a short fade-in. A
    /// second call while the loop runs is a no-op.
    pub fn start_wind(&mut self) {
        if self.muted || self.wind.is_some() {
            return;
        }
        let voice = match self.start_loop_voice("wind") {
            Some(v) => v,
            None => return,
        };
        if let Some(ctx) = &self.ctx {
            let now = ctx.current_time();
            let _ = voice.gain.gain().set_value_at_time(0.0, now);
            let _ = voice
                .gain
                .gain()
                .linear_ramp_to_value_at_time(1.0, now + WIND_RAMP_SEC);
        }
        self.wind = Some(voice);
    }

    /// Fade the wind out and tear the voice down after the ramp. No-op
    /// when the loop is not running.
    pub fn stop_wind(&mut self) {
        let voice = match self.wind.take() {
            Some(v) => v,
            None => return,
        };
        self.fade_out_and_teardown(voice, WIND_RAMP_SEC, WIND_TEARDOWN_MS);
    }

    pub fn start_drone(&mut self) {
        if self.drone.is_some() {
            return;
        }
        let voice = match self.start_loop_voice("drone") {
            Some(v) => v,
            None => return,
        };
        if let Some(ctx) = &self.ctx {
            let now = ctx.current_time();
            let _ = voice.gain.gain().set_value_at_time(0.0, now);
            let _ = voice
                .gain
                .gain()
                .linear_ramp_to_value_at_time(DRONE_LEVEL, now + DRONE_FADE_IN_SEC);
        }
        self.drone = Some(voice);
    }

    pub fn stop_drone(&mut self) {
        let voice = match self.drone.take() {
            Some(v) => v,
            None => return,
        };
        self.fade_out_and_teardown(voice, DRONE_FADE_OUT_SEC, DRONE_TEARDOWN_MS);
    }

    /// Crossfade the looping background chord to `section`'s. The old
    /// voice fades over the same 2 s window the new one fades in, so a
    /// brief overlap is intentional; at most one voice remains audible.
    pub fn switch_section_ambient(&mut self, section: &str) {
        if self.muted {
            return;
        }
        if self.current_section.as_deref() == Some(section) {
            return;
        }
        let key = format!("ambient_{section}");
        let voice = match self.start_loop_voice(&key) {
            Some(v) => v,
            None => return, // no ambient for this section
        };
        if let Some(ctx) = &self.ctx {
            let now = ctx.current_time();
            let _ = voice.gain.gain().set_value_at_time(0.0, now);
            let _ = voice
                .gain
                .gain()
                .linear_ramp_to_value_at_time(AMBIENT_LEVEL, now + AMBIENT_FADE_SEC);
        }
        if let Some(old) = self.ambient.take() {
            self.fade_out_and_teardown(old, AMBIENT_FADE_SEC, AMBIENT_TEARDOWN_MS);
        }
        self.ambient = Some(voice);
        self.current_section = Some(section.to_string());
    }

    fn stop_ambient(&mut self) {
        self.current_section = None;
        let voice = match self.ambient.take() {
            Some(v) => v,
            None => return,
        };
        self.fade_out_and_teardown(voice, AMBIENT_FADE_SEC, AMBIENT_TEARDOWN_MS);
    }

    fn graph(&self) -> Option<(&web::AudioContext, &web::GainNode)> {
        match (&self.ctx, &self.master) {
            (Some(c), Some(m)) => Some((c, m)),
            _ => None,
        }
    }

    /// Instantiate a looping (source, gain) voice for `key`, connected
    /// to the master bus and already started. Gain scheduling is the
    /// caller's; one-shots go through `play_click` instead.
    fn start_loop_voice(&self, key: &str) -> Option<LoopVoice> {
        let (ctx, master) = self.graph()?;
        let buffer = self.buffers.get(key)?;
        let source = ctx.create_buffer_source().ok()?;
        source.set_buffer(Some(buffer));
        source.set_loop(true);
        let gain = web::GainNode::new(ctx).ok()?;
        gain.gain().set_value(0.0);
        let _ = source.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(master);
        let _ = source.start();
        Some(LoopVoice { source, gain })
    }

    /// Hold the current gain, ramp to zero, and stop/disconnect the
    /// nodes shortly after the ramp completes to avoid a click.
    fn fade_out_and_teardown(&self, voice: LoopVoice, fade_sec: f64, teardown_ms: i32) {
        if let Some(ctx) = &self.ctx {
            let now = ctx.current_time();
            let param = voice.gain.gain();
            let _ = param.cancel_scheduled_values(now);
            let _ = param.set_value_at_time(param.value(), now);
            let _ = param.linear_ramp_to_value_at_time(0.0, now + fade_sec);
        }
        teardown_after(teardown_ms, voice);
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn upload_stereo(ctx: &web::AudioContext, mut buf: synth::StereoBuffer) -> Option<web::AudioBuffer> {
    let out = ctx
        .create_buffer(2, buf.len() as u32, ctx.sample_rate())
        .ok()?;
    let _ = out.copy_to_channel(&mut buf.left, 0);
    let _ = out.copy_to_channel(&mut buf.right, 1);
    Some(out)
}

fn upload_mono(ctx: &web::AudioContext, mut data: Vec<f32>) -> Option<web::AudioBuffer> {
    let out = ctx
        .create_buffer(1, data.len() as u32, ctx.sample_rate())
        .ok()?;
    let _ = out.copy_to_channel(&mut data, 0);
    Some(out)
}

fn teardown_after(delay_ms: i32, voice: LoopVoice) {
    let cb = Closure::once_into_js(move || {
        let _ = voice.source.stop();
        let _ = voice.source.disconnect();
        let _ = voice.gain.disconnect();
    });
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
    }
}
