//! Sticky-pane rendering port.

use crate::content::{ContentSlot, Visibility};
use crate::ids::{SegmentId, StepNumber};

/// The mutations the transition engine performs on the rendered page.
///
/// Implementations address sticky containers by the segment that owns them.
/// Every method is infallible: the page structure is built from validated
/// data, so a missing element is a rendering bug, not a user error.
pub trait StickySurface {
    /// Highlights `step` and clears the highlight from every other step.
    fn activate_step(&mut self, step: StepNumber);

    /// Sets the opacity of one slot container.
    fn set_slot_opacity(&mut self, segment: SegmentId, slot: ContentSlot, opacity: f64);

    /// Shows or hides one slot container.
    fn set_slot_visibility(&mut self, segment: SegmentId, slot: ContentSlot, visibility: Visibility);

    /// Sets the opacity of the image inside the image slot.
    fn set_image_opacity(&mut self, segment: SegmentId, opacity: f64);

    /// Replaces the image source and its alt text.
    fn set_image_source(&mut self, segment: SegmentId, source: &str, alt_text: &str);

    /// Applies a visual scale factor to the image.
    fn set_image_scale(&mut self, segment: SegmentId, scale: f64);

    /// Replaces the embedded video player with one playing `source`.
    fn load_video(&mut self, segment: SegmentId, source: &str, label: &str);

    /// Clears the embedded player's source so playback stops.
    fn stop_video(&mut self, segment: SegmentId);

    /// Sets the accessible label of the map slot.
    fn set_map_label(&mut self, segment: SegmentId, label: &str);
}
