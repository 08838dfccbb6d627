//! Recording sticky surface. Captures every mutation the engine performs.

use std::sync::{Arc, Mutex};

use scrolly_core::content::{ContentSlot, Visibility};
use scrolly_core::ids::{SegmentId, StepNumber};
use scrolly_core::surface::StickySurface;

/// One recorded `StickySurface` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ActivateStep(StepNumber),
    SlotOpacity(SegmentId, ContentSlot, f64),
    SlotVisibility(SegmentId, ContentSlot, Visibility),
    ImageOpacity(SegmentId, f64),
    ImageSource {
        segment: SegmentId,
        source: String,
        alt_text: String,
    },
    ImageScale(SegmentId, f64),
    LoadVideo {
        segment: SegmentId,
        source: String,
        label: String,
    },
    StopVideo(SegmentId),
    MapLabel(SegmentId, String),
}

/// A surface that records all calls in order.
///
/// Clones share the same log, so a test can keep a handle while the engine
/// owns the surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns and clears the recorded calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn take_calls(&self) -> Vec<SurfaceCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl StickySurface for RecordingSurface {
    fn activate_step(&mut self, step: StepNumber) {
        self.record(SurfaceCall::ActivateStep(step));
    }

    fn set_slot_opacity(&mut self, segment: SegmentId, slot: ContentSlot, opacity: f64) {
        self.record(SurfaceCall::SlotOpacity(segment, slot, opacity));
    }

    fn set_slot_visibility(&mut self, segment: SegmentId, slot: ContentSlot, visibility: Visibility) {
        self.record(SurfaceCall::SlotVisibility(segment, slot, visibility));
    }

    fn set_image_opacity(&mut self, segment: SegmentId, opacity: f64) {
        self.record(SurfaceCall::ImageOpacity(segment, opacity));
    }

    fn set_image_source(&mut self, segment: SegmentId, source: &str, alt_text: &str) {
        self.record(SurfaceCall::ImageSource {
            segment,
            source: source.to_owned(),
            alt_text: alt_text.to_owned(),
        });
    }

    fn set_image_scale(&mut self, segment: SegmentId, scale: f64) {
        self.record(SurfaceCall::ImageScale(segment, scale));
    }

    fn load_video(&mut self, segment: SegmentId, source: &str, label: &str) {
        self.record(SurfaceCall::LoadVideo {
            segment,
            source: source.to_owned(),
            label: label.to_owned(),
        });
    }

    fn stop_video(&mut self, segment: SegmentId) {
        self.record(SurfaceCall::StopVideo(segment));
    }

    fn set_map_label(&mut self, segment: SegmentId, label: &str) {
        self.record(SurfaceCall::MapLabel(segment, label.to_owned()));
    }
}
