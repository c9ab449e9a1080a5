use crate::shell::Shell;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// requestAnimationFrame subscription that only runs while the quiz asks for
/// frames. Deltas are measured between ticks; the first tick after an idle
/// spell measures from when it was requested.
pub struct FrameLoop {
    tick: Closure<dyn FnMut()>,
    scheduled: bool,
    last_instant: Option<Instant>,
}

impl FrameLoop {
    pub fn new(shell: Shell) -> Self {
        let tick = Closure::wrap(Box::new(move || shell.on_animation_frame()) as Box<dyn FnMut()>);
        Self {
            tick,
            scheduled: false,
            last_instant: None,
        }
    }

    /// Request the next frame when `wanted` and none is pending.
    pub fn schedule(&mut self, wanted: bool) {
        if !wanted || self.scheduled {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        match w.request_animation_frame(self.tick.as_ref().unchecked_ref()) {
            Ok(_) => {
                self.scheduled = true;
                self.last_instant.get_or_insert_with(Instant::now);
            }
            Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
        }
    }

    /// Milliseconds since the previous tick.
    pub fn begin_tick(&mut self) -> f32 {
        self.scheduled = false;
        let now = Instant::now();
        let dt = self
            .last_instant
            .replace(now)
            .map(|t| now - t)
            .unwrap_or_default();
        dt.as_secs_f32() * 1000.0
    }

    pub fn end_tick(&mut self) {
        if !self.scheduled {
            self.last_instant = None;
        }
    }
}
