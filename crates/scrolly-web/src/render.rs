//! Writes the story and its document structure into the page.

use scrolly_core::content::ContentSlot;
use scrolly_core::error::ScrollyError;
use scrolly_core::ids::SegmentId;
use scrolly_story::application::regions::{StoryRegion, StoryView};
use scrolly_story::domain::document::{
    Block, DocumentStructure, PlacedStep, Segment, SplitLayout, TextBlock,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

const RENDER_ACTION: &str = "Rendering the story";

/// Content section the blocks are written into.
pub(crate) const CONTENT_SECTION_ID: &str = "content-section";

/// Selector for one segment's sticky pane.
pub(crate) fn sticky_selector(segment: SegmentId) -> String {
    format!(".sticky-container[data-segment=\"{segment}\"]")
}

/// Selector for one slot inside a segment's sticky pane.
pub(crate) fn slot_selector(segment: SegmentId, slot: ContentSlot) -> String {
    format!("{} .{}", sticky_selector(segment), slot.css_class())
}

/// Story regions backed by elements of the page.
pub(crate) struct DomStoryView {
    document: Document,
}

impl DomStoryView {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }
}

impl StoryView for DomStoryView {
    fn set_region_html(&mut self, region: StoryRegion, html: &str) {
        match dom::element_by_id(&self.document, region.element_id()) {
            Ok(element) => element.set_inner_html(html),
            Err(err) => dom::warn(&format!("skipping region {region}: {}", err.message)),
        }
    }
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, ScrollyError> {
    let element = document
        .create_element(tag)
        .map_err(|e| dom::js_error(RENDER_ACTION, &e))?;
    element.set_class_name(class);
    Ok(element)
}

fn append(parent: &Element, child: &Element) -> Result<(), ScrollyError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| dom::js_error(RENDER_ACTION, &e))
}

fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), ScrollyError> {
    element
        .set_attribute(name, value)
        .map_err(|e| dom::js_error(RENDER_ACTION, &e))
}

fn render_text_block(document: &Document, block: &TextBlock) -> Result<Element, ScrollyError> {
    let element = create(document, "div", "text-content")?;
    set_attribute(&element, "data-step", &block.number.to_string())?;
    element.set_inner_html(&block.text);
    Ok(element)
}

fn render_step(document: &Document, step: &PlacedStep) -> Result<Element, ScrollyError> {
    let element = create(document, "div", "step")?;
    set_attribute(&element, "data-step", &step.number.to_string())?;
    set_attribute(&element, "data-content-type", step.record.content_type().as_str())?;

    let content = create(document, "div", "step-content")?;
    content.set_inner_html(&step.record.text);
    append(&element, &content)?;
    Ok(element)
}

fn render_sticky(document: &Document, segment: &Segment) -> Result<Element, ScrollyError> {
    let sticky = create(document, "div", "sticky-container")?;
    set_attribute(&sticky, "data-segment", &segment.id.to_string())?;

    for slot in segment.sticky.slots() {
        let container = create(document, "div", slot.css_class())?;
        match slot {
            ContentSlot::Image => {
                let image = document
                    .create_element("img")
                    .map_err(|e| dom::js_error(RENDER_ACTION, &e))?;
                append(&container, &image)?;
            }
            ContentSlot::Map => container.set_id(&segment.sticky.map_container_id()),
            ContentSlot::Video => {}
        }
        append(&sticky, &container)?;
    }
    Ok(sticky)
}

fn render_segment(document: &Document, segment: &Segment) -> Result<Element, ScrollyError> {
    let scrolly = create(document, "div", "scrolly-container")?;
    let steps = create(document, "div", "steps-container")?;
    for step in &segment.steps {
        append(&steps, &render_step(document, step)?)?;
    }
    append(&scrolly, &steps)?;
    append(&scrolly, &render_sticky(document, segment)?)?;
    Ok(scrolly)
}

fn percent(value: f64) -> String {
    format!("{value}%")
}

fn apply_layout(document: &Document, layout: SplitLayout) -> Result<(), ScrollyError> {
    for (selector, width) in [
        (".steps-container", layout.steps_width),
        (".sticky-container", layout.sticky_width),
    ] {
        let nodes = document
            .query_selector_all(selector)
            .map_err(|e| dom::js_error(RENDER_ACTION, &e))?;
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                dom::set_style(&element, "width", &percent(width));
            }
        }
    }
    Ok(())
}

/// Replaces the content section with `structure`'s blocks and applies its
/// horizontal split.
///
/// # Errors
///
/// Returns an internal error if the content section is missing or an element
/// cannot be created.
pub(crate) fn render_document(
    document: &Document,
    structure: &DocumentStructure,
) -> Result<(), ScrollyError> {
    let section = dom::element_by_id(document, CONTENT_SECTION_ID)?;
    section.set_inner_html("");

    for block in &structure.blocks {
        let element = match block {
            Block::Scrolly(segment) => render_segment(document, segment)?,
            Block::Text(text) => render_text_block(document, text)?,
        };
        append(&section, &element)?;
    }

    // Widths go on after the containers exist.
    if let Some(layout) = structure.layout {
        apply_layout(document, layout)?;
    }
    Ok(())
}
