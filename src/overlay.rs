use crate::constants::*;
use crate::dom;
use quiz_core::Verdict;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn verdict_text(verdict: &Verdict) -> String {
    if verdict.correct {
        format!("Correct! That's {}.", verdict.country_name)
    } else if verdict.answer.is_empty() {
        format!("That was {}.", verdict.country_name)
    } else {
        format!(
            "Not quite: \"{}\" is wrong, that was {}.",
            verdict.answer, verdict.country_name
        )
    }
}

/// Show the result panel for a submitted answer.
pub fn show_verdict(document: &web::Document, verdict: &Verdict) {
    if let Some(text) = document.get_element_by_id(RESULT_TEXT_ID) {
        text.set_text_content(Some(&verdict_text(verdict)));
    }
    if let Some(el) = document.get_element_by_id(RESULT_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.toggle_with_force("correct", verdict.correct);
        _ = cl.toggle_with_force("wrong", !verdict.correct);
        dom::set_hidden(&el, false);
    }
    if let Some(button) = document.get_element_by_id(CONTINUE_BUTTON_ID) {
        if let Ok(button) = button.dyn_into::<web::HtmlElement>() {
            _ = button.focus();
        }
    }
}

#[inline]
pub fn hide_verdict(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(RESULT_OVERLAY_ID) {
        dom::set_hidden(&el, true);
    }
}

/// The session cannot go on; leave a line for the player.
pub fn show_error(document: &web::Document, message: &str) {
    hide_verdict(document);
    if let Some(text) = document.get_element_by_id(ERROR_TEXT_ID) {
        text.set_text_content(Some(message));
    }
    if let Some(el) = document.get_element_by_id(ERROR_OVERLAY_ID) {
        dom::set_hidden(&el, false);
    }
}
