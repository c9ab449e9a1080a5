//! Drives a [`Quiz`] from the browser.
//!
//! Every DOM callback goes through [`Shell::dispatch`], which queues the
//! event and drains the queue through the quiz unless a drain is already
//! running further up the stack. Effects are carried out by [`WebHost`].

use crate::audio::FeedbackTones;
use crate::dom;
use crate::frame::FrameLoop;
use crate::overlay;
use crate::render::GpuState;
use crate::texture::{self, Compositor};
use quiz_core::{
    apply_all, CameraFrame, Country, Effect, Event, Host, Phase, Quiz, QuizError, Resource,
    Verdict,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use web_sys as web;

pub type EventQueue = Rc<RefCell<VecDeque<Event>>>;

thread_local! {
    // keeps the session alive for the lifetime of the page
    static SESSION: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
}

/// Everything the host needs, built by `init` before the session starts.
pub struct Parts {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub input: web::HtmlInputElement,
    pub renderer: GpuState<'static>,
    pub compositor: Compositor,
    pub tones: Option<FeedbackTones>,
}

pub struct App {
    quiz: Quiz,
    host: WebHost,
    frames: FrameLoop,
}

impl App {
    fn drain(&mut self, effects: Vec<Effect>, queue: &EventQueue) {
        apply_all(&effects, &mut self.host);
        loop {
            let next = queue.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            let effects = self.quiz.update(event);
            apply_all(&effects, &mut self.host);
        }
        self.frames.schedule(self.quiz.wants_animation_frames());
    }
}

/// Cheap handle captured by callbacks; does not keep the session alive.
#[derive(Clone)]
pub struct Shell {
    app: Weak<RefCell<App>>,
    queue: EventQueue,
}

/// Start the session and carry out the quiz's opening effects.
pub fn start(quiz: Quiz, initial: Vec<Effect>, parts: Parts) -> Shell {
    let queue = EventQueue::default();
    let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
        let shell = Shell {
            app: weak.clone(),
            queue: queue.clone(),
        };
        RefCell::new(App {
            quiz,
            host: WebHost::new(parts, shell.clone()),
            frames: FrameLoop::new(shell),
        })
    });
    let shell = Shell {
        app: Rc::downgrade(&app),
        queue,
    };
    SESSION.with(|s| *s.borrow_mut() = Some(app));
    shell.run(initial);
    shell
}

impl Shell {
    pub fn dispatch(&self, event: Event) {
        self.queue.borrow_mut().push_back(event);
        self.run(Vec::new());
    }

    fn run(&self, effects: Vec<Effect>) {
        let Some(app) = self.app.upgrade() else {
            return;
        };
        // a drain further up the stack picks the queued event up
        let Ok(mut app) = app.try_borrow_mut() else {
            return;
        };
        app.drain(effects, &self.queue);
    }

    fn with_app<R>(&self, f: impl FnOnce(&mut App) -> R) -> Option<R> {
        let app = self.app.upgrade()?;
        let mut app = app.try_borrow_mut().ok()?;
        Some(f(&mut app))
    }

    fn phase_is(&self, f: impl FnOnce(&Phase) -> bool) -> bool {
        self.with_app(|app| f(app.quiz.phase())).unwrap_or(false)
    }

    pub fn on_answer_edited(&self, text: String) {
        if self.phase_is(|p| matches!(p, Phase::Answering { .. })) {
            self.dispatch(Event::AnswerEdited(text));
        }
    }

    /// Enter in the answer field submits; while a result shows it continues.
    pub fn on_enter(&self, text: String) {
        if self.phase_is(|p| matches!(p, Phase::Answering { .. })) {
            self.dispatch(Event::AnswerSubmitted(text));
        } else {
            self.on_continue();
        }
    }

    pub fn on_continue(&self) {
        if !self.phase_is(|p| matches!(p, Phase::ShowingResult { .. })) {
            return;
        }
        if let Some(document) = dom::window_document() {
            overlay::hide_verdict(&document);
        }
        self.dispatch(Event::Continue);
    }

    pub fn on_resize(&self) {
        let size = self.with_app(|app| dom::sync_canvas_backing_size(&app.host.canvas));
        if let Some((width, height)) = size {
            self.dispatch(Event::Resize { width, height });
        }
    }

    pub fn on_animation_frame(&self) {
        let Some(delta_ms) = self.with_app(|app| app.frames.begin_tick()) else {
            return;
        };
        self.dispatch(Event::AnimationFrame { delta_ms });
        self.with_app(|app| app.frames.end_tick());
    }

    fn map_loaded(&self, image: web::HtmlImageElement) {
        let shown = self.with_app(|app| {
            app.host.compositor.set_base(image);
            app.host.present_map()
        });
        match shown {
            Some(Ok(())) => self.dispatch(Event::MapTextureLoaded),
            Some(Err(e)) => self.dispatch(Event::ResourceFailed {
                resource: Resource::MapTexture,
                reason: e.to_string(),
            }),
            None => log::warn!("[shell] map loaded after the session ended"),
        }
    }

    fn highlight_loaded(
        &self,
        index: usize,
        country: &'static Country,
        image: web::HtmlImageElement,
    ) {
        let shown = self.with_app(|app| {
            app.host.compositor.set_highlight(image, country);
            app.host.present_map()
        });
        match shown {
            Some(Ok(())) => self.dispatch(Event::HighlightReady {
                country_index: index,
            }),
            Some(Err(e)) => self.dispatch(Event::ResourceFailed {
                resource: Resource::Highlight {
                    country_index: index,
                },
                reason: e.to_string(),
            }),
            None => log::warn!(
                "[shell] highlight for {} arrived after the session ended",
                country.code
            ),
        }
    }
}

pub struct WebHost {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    input: web::HtmlInputElement,
    renderer: GpuState<'static>,
    compositor: Compositor,
    tones: Option<FeedbackTones>,
    last_frame: Option<CameraFrame>,
    shell: Shell,
}

impl WebHost {
    fn new(parts: Parts, shell: Shell) -> Self {
        Self {
            document: parts.document,
            canvas: parts.canvas,
            input: parts.input,
            renderer: parts.renderer,
            compositor: parts.compositor,
            tones: parts.tones,
            last_frame: None,
            shell,
        }
    }

    /// Recomposite the globe texture and redraw the last frame with it.
    fn present_map(&mut self) -> anyhow::Result<()> {
        let image = self.compositor.compose()?;
        let pixels = image.data();
        self.renderer
            .upload_map(&pixels, image.width(), image.height())?;
        if let Some(frame) = self.last_frame {
            self.draw(&frame);
        }
        Ok(())
    }

    fn draw(&mut self, frame: &CameraFrame) {
        self.renderer
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.renderer.render(frame) {
            log::error!("render error: {:?}", e);
        }
    }

    fn load_svg(&self, country: Option<(usize, &'static Country)>) -> anyhow::Result<()> {
        let markup = self.compositor.map_markup(country.map(|(_, c)| c))?;
        let loaded = self.shell.clone();
        let failed = self.shell.clone();
        let resource = match country {
            Some((index, _)) => Resource::Highlight {
                country_index: index,
            },
            None => Resource::MapTexture,
        };
        texture::load_svg_image(
            &markup,
            move |image| match country {
                Some((index, c)) => loaded.highlight_loaded(index, c, image),
                None => loaded.map_loaded(image),
            },
            move |reason| failed.dispatch(Event::ResourceFailed { resource, reason }),
        )
    }
}

impl Host for WebHost {
    fn load_map_texture(&mut self) {
        if let Err(e) = self.load_svg(None) {
            self.shell.dispatch(Event::ResourceFailed {
                resource: Resource::MapTexture,
                reason: e.to_string(),
            });
        }
    }

    fn measure_viewport(&mut self) {
        let (width, height) = dom::sync_canvas_backing_size(&self.canvas);
        self.shell.dispatch(Event::Resize { width, height });
    }

    fn render_highlight(&mut self, index: usize, country: &'static Country) {
        log::debug!("[shell] highlighting {} ({:?})", country.code, country.highlight);
        if let Err(e) = self.load_svg(Some((index, country))) {
            self.shell.dispatch(Event::ResourceFailed {
                resource: Resource::Highlight {
                    country_index: index,
                },
                reason: e.to_string(),
            });
        }
    }

    fn render_camera(&mut self, frame: &CameraFrame) {
        self.last_frame = Some(*frame);
        self.draw(frame);
    }

    fn play_feedback_sound(&mut self, correct: bool) {
        if let Some(tones) = &self.tones {
            tones.play(correct);
        }
    }

    fn show_verdict(&mut self, verdict: &Verdict) {
        self.input.set_disabled(true);
        overlay::show_verdict(&self.document, verdict);
    }

    fn reset_answer_input(&mut self) {
        overlay::hide_verdict(&self.document);
        self.input.set_value("");
        self.input.set_disabled(false);
        _ = self.input.focus();
    }

    fn report_fatal(&mut self, error: &QuizError) {
        self.input.set_disabled(true);
        overlay::show_error(&self.document, &format!("Something went wrong: {}", error));
    }
}
