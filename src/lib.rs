#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use quiz_core::{Countries, Event, Quiz, QuizConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod frame;
mod mesh;
mod overlay;
mod render;
mod shell;
mod texture;

fn wire_listeners(document: &web::Document, input: &web::HtmlInputElement, shell: &shell::Shell) {
    let s = shell.clone();
    dom::add_input_listener(input, move |text| s.on_answer_edited(text));
    let s = shell.clone();
    dom::add_enter_listener(input, move |text| s.on_enter(text));
    let s = shell.clone();
    dom::add_document_enter_listener(document, move || s.on_continue());
    let s = shell.clone();
    dom::add_click_listener(document, CONTINUE_BUTTON_ID, move || s.on_continue());
    let s = shell.clone();
    dom::add_resize_listener(move || s.on_resize());
    let s = shell.clone();
    dom::add_visibility_listener(document, move |visible| {
        s.dispatch(Event::VisibilityChanged(visible))
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-quiz starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_error(&document, &format!("Could not start the quiz: {}", e));
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let input: web::HtmlInputElement = dom::element_by_id(&document, ANSWER_INPUT_ID)?;
    // enabled once the first country is on screen
    input.set_disabled(true);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let renderer = render::GpuState::new(leaked_canvas).await?;
    let compositor = texture::Compositor::new(&document)?;
    let tones = match audio::FeedbackTones::new() {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("[audio] feedback tones disabled: {:?}", e);
            None
        }
    };

    let countries = Countries::builtin()?;
    let seed = rand::random::<u64>();
    log::info!("[quiz] seed {}", seed);
    let (quiz, effects) = Quiz::new(countries, QuizConfig::default(), seed)?;

    let shell = shell::start(
        quiz,
        effects,
        shell::Parts {
            document: document.clone(),
            canvas,
            input: input.clone(),
            renderer,
            compositor,
            tones,
        },
    );
    wire_listeners(&document, &input, &shell);
    shell.dispatch(Event::VisibilityChanged(dom::is_page_visible(&document)));
    Ok(())
}
