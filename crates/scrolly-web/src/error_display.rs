//! The page's error region.

use scrolly_core::error::ScrollyError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

fn region(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Shows `err` in the error region. The hint line is hidden when there is no
/// hint.
///
/// Also logs the error to the console, so it is visible even if the page
/// shell lacks the region.
pub(crate) fn show(err: &ScrollyError) {
    dom::error(&format!("{}: {} ({})", err.kind, err.message, err.action));

    let Ok(document) = dom::document() else {
        return;
    };

    if let Some(message) = region(&document, "error-message") {
        message.set_text_content(Some(&err.message));
    }
    if let Some(action) = region(&document, "error-action") {
        action.set_text_content(Some(&err.action));
    }
    if let Some(hint) = region(&document, "error-hint") {
        match &err.hint {
            Some(text) => {
                hint.set_text_content(Some(text));
                dom::set_style(&hint, "display", "block");
            }
            None => dom::set_style(&hint, "display", "none"),
        }
    }
    if let Some(container) = region(&document, "error-container") {
        dom::set_style(&container, "display", "flex");
    }
}
