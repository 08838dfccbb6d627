//! Scrollama binding.

use std::rc::Rc;

use scrolly_core::error::ScrollyError;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::driver::StepDriver;

/// Steps the scroller watches. Text blocks are not steps.
pub(crate) const STEP_SELECTOR: &str = ".scrolly-container .step";

/// Fraction of the viewport height, from the top, at which a step counts as
/// entered.
pub(crate) const STEP_OFFSET: f64 = 0.65;

const BIND_ACTION: &str = "Setting up scrolling";

#[wasm_bindgen]
extern "C" {
    type Scroller;

    #[wasm_bindgen(js_name = scrollama)]
    fn scrollama() -> Scroller;

    #[wasm_bindgen(method, catch)]
    fn setup(this: &Scroller, options: &JsValue) -> Result<Scroller, JsValue>;

    #[wasm_bindgen(method, js_name = onStepEnter)]
    fn on_step_enter(this: &Scroller, handler: &js_sys::Function) -> Scroller;

    #[wasm_bindgen(method)]
    fn resize(this: &Scroller);
}

#[derive(Serialize)]
struct SetupOptions {
    step: &'static str,
    offset: f64,
}

/// Index of the entered step in a Scrollama step-enter response.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn entered_index(response: &JsValue) -> Option<usize> {
    let index = js_sys::Reflect::get(response, &JsValue::from_str("index"))
        .ok()?
        .as_f64()?;
    (index >= 0.0 && index.fract() == 0.0).then(|| index as usize)
}

/// Starts watching the rendered steps and feeds entered steps to `driver`.
///
/// The scroller and its callbacks live for the rest of the page.
///
/// # Errors
///
/// Returns an internal error if Scrollama rejects the setup or the resize
/// listener cannot be added.
pub(crate) fn bind(driver: Rc<StepDriver>) -> Result<(), ScrollyError> {
    let options = SetupOptions {
        step: STEP_SELECTOR,
        offset: STEP_OFFSET,
    }
    .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
    .map_err(|e| dom::js_error(BIND_ACTION, &JsValue::from(e)))?;

    let scroller = scrollama()
        .setup(&options)
        .map_err(|e| dom::js_error(BIND_ACTION, &e))?;

    let on_enter = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
        match entered_index(&response) {
            Some(index) => driver.step_entered(index),
            None => dom::warn("step-enter event without an index"),
        }
    });
    scroller.on_step_enter(on_enter.as_ref().unchecked_ref());
    on_enter.forget();

    let on_resize = Closure::<dyn Fn()>::new(move || scroller.resize());
    web_sys::window()
        .ok_or_else(|| dom::js_error(BIND_ACTION, &JsValue::from_str("no window")))?
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| dom::js_error(BIND_ACTION, &e))?;
    on_resize.forget();

    Ok(())
}
