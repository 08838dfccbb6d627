//! Small DOM helpers shared by the renderer and the sticky surface.

use scrolly_core::error::{ErrorKind, ScrollyError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Readable text for a thrown JS value.
pub(crate) fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Wraps a thrown JS value as an internal error.
pub(crate) fn js_error(action: &str, err: &JsValue) -> ScrollyError {
    ScrollyError::new(ErrorKind::Internal, action, describe(err))
}

/// The page's document.
pub(crate) fn document() -> Result<Document, ScrollyError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| {
            ScrollyError::new(ErrorKind::Internal, "Loading the page", "No document is available")
        })
}

/// Looks up an element by id.
pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, ScrollyError> {
    document.get_element_by_id(id).ok_or_else(|| {
        ScrollyError::new(
            ErrorKind::Internal,
            "Rendering the story",
            format!("The page has no element with id \"{id}\""),
        )
        .with_hint("Check that index.html matches this version of the client")
    })
}

/// First element matching `selector`, as an `HtmlElement`.
pub(crate) fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Sets one inline style property, logging on failure.
pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn(&format!("could not set {property}: {}", describe(&err)));
    }
}

fn class_failure(class: &str, present: bool, detail: &str) -> String {
    let verb = if present { "add" } else { "remove" };
    format!("could not {verb} class {class}: {detail}")
}

/// Adds or removes one class, logging on failure.
pub(crate) fn set_class(element: &HtmlElement, class: &str, present: bool) {
    let classes = element.class_list();
    let result = if present {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        warn(&class_failure(class, present, &describe(&err)));
    }
}

pub(crate) fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

pub(crate) fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_failure_names_the_operation() {
        assert_eq!(
            class_failure("is-active", true, "SyntaxError"),
            "could not add class is-active: SyntaxError"
        );
        assert_eq!(
            class_failure("is-active", false, "SyntaxError"),
            "could not remove class is-active: SyntaxError"
        );
    }
}
