//! The sticky panes as rendered in the page.

use scrolly_core::content::{ContentSlot, Visibility};
use scrolly_core::ids::{SegmentId, StepNumber};
use scrolly_core::surface::StickySurface;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::dom;
use crate::render::slot_selector;

/// Class marking the step that is currently in view.
const ACTIVE_CLASS: &str = "is-active";

/// Referrer policy for embedded players.
const VIDEO_REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

/// CSS `display` value for `slot`.
fn display_value(slot: ContentSlot, visibility: Visibility) -> &'static str {
    match (visibility, slot) {
        (Visibility::Hidden, _) => "none",
        (Visibility::Visible, ContentSlot::Image) => "flex",
        (Visibility::Visible, ContentSlot::Map | ContentSlot::Video) => "block",
    }
}

/// `StickySurface` writing to the page's DOM.
///
/// Missing elements are logged and skipped; the next step entered brings the
/// page back in line.
pub(crate) struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }

    fn slot(&self, segment: SegmentId, slot: ContentSlot) -> Option<HtmlElement> {
        let found = dom::query(&self.document, &slot_selector(segment, slot));
        if found.is_none() {
            dom::warn(&format!("segment {segment} has no {slot:?} slot"));
        }
        found
    }

    fn image(&self, segment: SegmentId) -> Option<HtmlImageElement> {
        let selector = format!("{} img", slot_selector(segment, ContentSlot::Image));
        dom::query(&self.document, &selector).and_then(|element| element.dyn_into().ok())
    }

    fn set_attribute(element: &HtmlElement, name: &str, value: &str) {
        if let Err(err) = element.set_attribute(name, value) {
            dom::warn(&format!("could not set {name}: {}", dom::describe(&err)));
        }
    }
}

impl StickySurface for DomSurface {
    fn activate_step(&mut self, step: StepNumber) {
        if let Ok(steps) = self.document.query_selector_all(".step") {
            for index in 0..steps.length() {
                if let Some(element) = steps
                    .get(index)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                {
                    dom::set_class(&element, ACTIVE_CLASS, false);
                }
            }
        }

        let selector = format!(".step[data-step=\"{step}\"]");
        if let Some(element) = dom::query(&self.document, &selector) {
            dom::set_class(&element, ACTIVE_CLASS, true);
        }
        dom::log(&format!("Step {step} entered"));
    }

    fn set_slot_opacity(&mut self, segment: SegmentId, slot: ContentSlot, opacity: f64) {
        if let Some(element) = self.slot(segment, slot) {
            dom::set_style(&element, "opacity", &opacity.to_string());
        }
    }

    fn set_slot_visibility(
        &mut self,
        segment: SegmentId,
        slot: ContentSlot,
        visibility: Visibility,
    ) {
        if let Some(element) = self.slot(segment, slot) {
            dom::set_style(&element, "display", display_value(slot, visibility));
        }
    }

    fn set_image_opacity(&mut self, segment: SegmentId, opacity: f64) {
        if let Some(image) = self.image(segment) {
            dom::set_style(&image, "opacity", &opacity.to_string());
        }
    }

    fn set_image_source(&mut self, segment: SegmentId, source: &str, alt_text: &str) {
        if let Some(image) = self.image(segment) {
            image.set_src(source);
            image.set_alt(alt_text);
        }
    }

    fn set_image_scale(&mut self, segment: SegmentId, scale: f64) {
        if let Some(image) = self.image(segment) {
            dom::set_style(&image, "transform", &format!("scale({scale})"));
        }
    }

    fn load_video(&mut self, segment: SegmentId, source: &str, label: &str) {
        let Some(container) = self.slot(segment, ContentSlot::Video) else {
            return;
        };
        let iframe = match self.document.create_element("iframe") {
            Ok(element) => element,
            Err(err) => {
                let reason = dom::describe(&err);
                dom::error(&format!("could not create video player: {reason}"));
                return;
            }
        };
        for (name, value) in [
            ("src", source),
            ("frameborder", "0"),
            ("referrerpolicy", VIDEO_REFERRER_POLICY),
        ] {
            if let Err(err) = iframe.set_attribute(name, value) {
                dom::warn(&format!("could not set {name}: {}", dom::describe(&err)));
            }
        }

        container.set_inner_html("");
        if let Err(err) = container.append_child(&iframe) {
            dom::error(&format!("could not add video player: {}", dom::describe(&err)));
        }
        Self::set_attribute(&container, "aria-label", label);
        Self::set_attribute(&container, "role", "tooltip");
    }

    fn stop_video(&mut self, segment: SegmentId) {
        let selector = format!("{} iframe", slot_selector(segment, ContentSlot::Video));
        if let Some(iframe) = dom::query(&self.document, &selector) {
            Self::set_attribute(&iframe, "src", "");
        }
    }

    fn set_map_label(&mut self, segment: SegmentId, label: &str) {
        if let Some(element) = self.slot(segment, ContentSlot::Map) {
            Self::set_attribute(&element, "aria-label", label);
        }
    }
}
