use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong element type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Calls `handler` with the field's value after every edit.
pub fn add_input_listener(
    input: &web::HtmlInputElement,
    mut handler: impl FnMut(String) + 'static,
) {
    let field = input.clone();
    let closure = Closure::wrap(Box::new(move || handler(field.value())) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Calls `handler` with the field's value when Enter is pressed in it.
pub fn add_enter_listener(
    input: &web::HtmlInputElement,
    mut handler: impl FnMut(String) + 'static,
) {
    let field = input.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.repeat() {
            ev.prevent_default();
            handler(field.value());
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Enter anywhere on the page outside the answer field.
pub fn add_document_enter_listener(document: &web::Document, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let in_input = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            .is_some();
        if ev.key() == "Enter" && !ev.repeat() && !in_input {
            ev.prevent_default();
            handler();
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_resize_listener(mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn add_visibility_listener(document: &web::Document, mut handler: impl FnMut(bool) + 'static) {
    let doc = document.clone();
    let closure =
        Closure::wrap(Box::new(move || handler(is_page_visible(&doc))) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn is_page_visible(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Visible
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the new size in pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

#[inline]
pub fn set_hidden(element: &web::Element, hidden: bool) {
    let cl = element.class_list();
    if hidden {
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = element.set_attribute("style", "display:none");
    } else {
        _ = cl.remove_1("hidden");
        _ = element.set_attribute("style", "");
    }
}
