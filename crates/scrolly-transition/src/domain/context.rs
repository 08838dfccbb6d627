//! The engine's working state.

use std::collections::HashMap;

use scrolly_core::content::{ContentSlot, ContentType};
use scrolly_core::ids::{SegmentId, StepNumber};

use super::schedule::{PendingTask, TaskToken};
use super::sticky::StickyState;

/// The step handled before the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviousStep {
    /// Its position.
    pub number: StepNumber,
    /// Its content type.
    pub content_type: ContentType,
}

/// Whether entering `number` needs a cross-content transition.
///
/// True on the first step, when the content type changes, or when the scroll
/// skipped over at least one step (in either direction).
#[must_use]
pub fn requires_transition(
    previous: Option<PreviousStep>,
    number: StepNumber,
    content_type: ContentType,
) -> bool {
    match previous {
        None => true,
        Some(previous) => {
            previous.content_type != content_type || previous.number.distance(number) > 1
        }
    }
}

/// Mutable state owned by one `TransitionEngine` for one page load.
#[derive(Debug, Default)]
pub struct TransitionContext {
    previous: Option<PreviousStep>,
    stickies: HashMap<SegmentId, StickyState>,
    playing_video: Option<SegmentId>,
    pending_reveal: Option<TaskToken>,
    tasks: HashMap<TaskToken, PendingTask>,
    next_token: u64,
}

impl TransitionContext {
    /// The last step handled, if any.
    #[must_use]
    pub fn previous(&self) -> Option<PreviousStep> {
        self.previous
    }

    /// State of a segment's pane, if the segment has been entered.
    #[must_use]
    pub fn sticky(&self, segment: SegmentId) -> Option<&StickyState> {
        self.stickies.get(&segment)
    }

    /// The segment whose video player was last loaded and not yet stopped.
    #[must_use]
    pub fn playing_video(&self) -> Option<SegmentId> {
        self.playing_video
    }

    /// Whether `token` still refers to work that has to run.
    #[must_use]
    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.tasks.contains_key(&token)
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn enter_segment(&mut self, segment: SegmentId) {
        self.stickies.entry(segment).or_default();
    }

    pub(crate) fn sticky_mut(&mut self, segment: SegmentId) -> &mut StickyState {
        self.stickies.entry(segment).or_default()
    }

    pub(crate) fn record_previous(&mut self, previous: PreviousStep) {
        self.previous = Some(previous);
    }

    pub(crate) fn take_playing_video(&mut self) -> Option<SegmentId> {
        self.playing_video.take()
    }

    pub(crate) fn set_playing_video(&mut self, segment: SegmentId) {
        self.playing_video = Some(segment);
    }

    /// Schedules a reveal, superseding the pending one.
    pub(crate) fn schedule_reveal(&mut self, segment: SegmentId, slot: ContentSlot) -> TaskToken {
        if let Some(stale) = self.pending_reveal.take() {
            self.tasks.remove(&stale);
        }
        let token = self.issue(PendingTask::Reveal { segment, slot });
        self.pending_reveal = Some(token);
        token
    }

    /// Schedules an image swap, superseding the segment's pending swap.
    pub(crate) fn schedule_swap(
        &mut self,
        segment: SegmentId,
        source: String,
        alt_text: String,
    ) -> TaskToken {
        if let Some(stale) = self.sticky_mut(segment).pending_swap.take() {
            self.tasks.remove(&stale);
        }
        let token = self.issue(PendingTask::Swap {
            segment,
            source,
            alt_text,
        });
        self.sticky_mut(segment).pending_swap = Some(token);
        token
    }

    /// Removes and returns the task behind `token`. Stale tokens yield `None`.
    pub(crate) fn take_task(&mut self, token: TaskToken) -> Option<PendingTask> {
        let task = self.tasks.remove(&token)?;
        match &task {
            PendingTask::Reveal { .. } => {
                if self.pending_reveal == Some(token) {
                    self.pending_reveal = None;
                }
            }
            PendingTask::Swap { segment, .. } => {
                let sticky = self.sticky_mut(*segment);
                if sticky.pending_swap == Some(token) {
                    sticky.pending_swap = None;
                }
            }
        }
        Some(task)
    }

    fn issue(&mut self, task: PendingTask) -> TaskToken {
        self.next_token += 1;
        let token = TaskToken::new(self.next_token);
        self.tasks.insert(token, task);
        token
    }
}
