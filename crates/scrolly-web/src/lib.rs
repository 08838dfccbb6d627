//! Scrolly Web, the browser client.
//!
//! Fetches the validated story from the API, renders it into the page shell,
//! and drives the sticky panes from Scrollama's step-entered events through
//! the transition engine. Leaflet and Scrollama are expected as page globals.

mod api;
mod dom;
mod driver;
mod error_display;
mod leaflet;
mod render;
mod scrollama;
mod surface;
mod timers;

use scrolly_core::error::ScrollyError;
use scrolly_story::application::builder::build_document;
use scrolly_story::application::regions::render_story;
use scrolly_transition::application::engine::TransitionEngine;
use wasm_bindgen::prelude::*;

use crate::driver::StepDriver;
use crate::leaflet::LeafletBackend;
use crate::render::DomStoryView;
use crate::surface::DomSurface;

/// Where the page fetches its story from.
const STORY_ENDPOINT: &str = "/api/v1/story";

async fn run() -> Result<(), ScrollyError> {
    let prepared = api::fetch_story(STORY_ENDPOINT).await?;
    let document = dom::document()?;

    render_story(&prepared.story, &mut DomStoryView::new(document.clone()));

    let mut structure = build_document(&prepared.steps);
    structure.apply_split(prepared.story.text_horizontal_percentage);
    render::render_document(&document, &structure)?;

    let steps = driver::scrolly_steps(&structure);
    dom::log(&format!("Rendered {} scrolly steps", steps.len()));

    let engine = TransitionEngine::new(DomSurface::new(document), LeafletBackend);
    scrollama::bind(StepDriver::new(engine, steps))
}

/// Builds the story page.
///
/// # Errors
///
/// Any failure is shown in the page's error region, then returned so the
/// promise rejects with it.
#[wasm_bindgen]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    run().await.map_err(|err| {
        error_display::show(&err);
        JsValue::from(js_sys::Error::new(&err.to_string()))
    })
}
