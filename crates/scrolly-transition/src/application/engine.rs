//! The step-transition engine.

use std::time::Duration;

use scrolly_core::content::{ContentSlot, Visibility};
use scrolly_core::ids::{SegmentId, StepNumber};
use scrolly_core::map::MapBackend;
use scrolly_core::surface::StickySurface;
use scrolly_story::domain::step::{StepContent, StepRecord};
use tracing::{debug, info, warn};

use super::map_adapter::MapAdapter;
use crate::domain::context::{PreviousStep, TransitionContext, requires_transition};
use crate::domain::schedule::{PendingTask, ScheduledTask, TRANSITION_DELAY, TaskKind, TaskToken};

/// A step-entered event.
#[derive(Debug, Clone, Copy)]
pub struct EnteredStep<'a> {
    /// Position of the entered step.
    pub number: StepNumber,
    /// Segment the step belongs to.
    pub segment: SegmentId,
    /// The step's validated record.
    pub record: &'a StepRecord,
}

/// Drives one page's sticky panes.
///
/// The engine trusts its input: records were validated before the page was
/// built.
pub struct TransitionEngine<S: StickySurface, M: MapBackend> {
    surface: S,
    maps: MapAdapter<M>,
    context: TransitionContext,
    delay: Duration,
}

impl<S: StickySurface, M: MapBackend> TransitionEngine<S, M> {
    /// Creates an engine with the standard transition delay.
    pub fn new(surface: S, backend: M) -> Self {
        Self {
            surface,
            maps: MapAdapter::new(backend),
            context: TransitionContext::default(),
            delay: TRANSITION_DELAY,
        }
    }

    /// Overrides the delay handed out with scheduled tasks.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handles a step scrolling into view.
    ///
    /// Returns the delayed work the caller must schedule. Every returned task
    /// supersedes the pending task it replaces.
    pub fn handle_step_enter(&mut self, step: EnteredStep<'_>) -> Vec<ScheduledTask> {
        let EnteredStep {
            number,
            segment,
            record,
        } = step;
        let content_type = record.content_type();
        info!(step = %number, segment = %segment, %content_type, "Step entered");

        self.surface.activate_step(number);
        self.context.enter_segment(segment);

        let mut scheduled = Vec::new();

        if let Some(slot) = content_type.slot()
            && requires_transition(self.context.previous(), number, content_type)
        {
            scheduled.push(self.begin_transition(segment, slot));
        }

        match &record.content {
            StepContent::Image(image) => {
                if self.context.sticky_mut(segment).image_changes(&image.file_path) {
                    scheduled.push(self.begin_image_swap(
                        segment,
                        &image.file_path,
                        &image.alt_text,
                    ));
                }
                if let Some(scale) = image.scale {
                    self.surface.set_image_scale(segment, scale);
                }
            }
            StepContent::Video(video) => {
                self.surface
                    .load_video(segment, &video.file_path, &video.alt_text);
                self.context.set_playing_video(segment);
            }
            StepContent::Map(map) => {
                let action = self.maps.show_map(
                    &segment.map_container_id(),
                    map.placement.latitude,
                    map.placement.longitude,
                    map.placement.zoom,
                );
                debug!(segment = %segment, ?action, "Map updated");
                self.surface.set_map_label(segment, &map.alt_text);
            }
            StepContent::Text => {
                warn!(step = %number, "Text step reached the transition engine; ignoring");
            }
        }

        self.context.record_previous(PreviousStep {
            number,
            content_type,
        });
        scheduled
    }

    /// Runs a scheduled task.
    ///
    /// Returns `false`, doing nothing, when the token is stale: the task has
    /// already run or was superseded by a newer one.
    pub fn run_task(&mut self, token: TaskToken) -> bool {
        let Some(task) = self.context.take_task(token) else {
            debug!(%token, "Ignoring stale task");
            return false;
        };
        debug!(%token, kind = ?task.kind(), "Running task");

        match task {
            PendingTask::Reveal { segment, slot } => {
                for other in ContentSlot::ALL {
                    if other == slot {
                        self.surface.set_slot_opacity(segment, other, 1.0);
                        self.surface
                            .set_slot_visibility(segment, other, Visibility::Visible);
                    } else {
                        self.surface
                            .set_slot_visibility(segment, other, Visibility::Hidden);
                    }
                }
            }
            PendingTask::Swap {
                segment,
                source,
                alt_text,
            } => {
                self.surface.set_image_source(segment, &source, &alt_text);
                self.surface.set_image_opacity(segment, 1.0);
            }
        }
        true
    }

    /// The engine's working state.
    pub fn context(&self) -> &TransitionContext {
        &self.context
    }

    /// The map adapter.
    pub fn maps(&self) -> &MapAdapter<M> {
        &self.maps
    }

    fn begin_transition(&mut self, segment: SegmentId, slot: ContentSlot) -> ScheduledTask {
        for each in ContentSlot::ALL {
            self.surface.set_slot_opacity(segment, each, 0.0);
        }
        if let Some(playing) = self.context.take_playing_video() {
            self.surface.stop_video(playing);
        }

        let token = self.context.schedule_reveal(segment, slot);
        ScheduledTask {
            token,
            kind: TaskKind::RevealSlot,
            delay: self.delay,
        }
    }

    fn begin_image_swap(
        &mut self,
        segment: SegmentId,
        source: &str,
        alt_text: &str,
    ) -> ScheduledTask {
        self.surface.set_image_opacity(segment, 0.0);
        self.context.sticky_mut(segment).image_path = Some(source.to_owned());

        let token = self
            .context
            .schedule_swap(segment, source.to_owned(), alt_text.to_owned());
        ScheduledTask {
            token,
            kind: TaskKind::SwapImage,
            delay: self.delay,
        }
    }
}
