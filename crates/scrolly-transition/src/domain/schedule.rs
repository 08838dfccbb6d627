//! Cancellable delayed work.

use std::fmt;
use std::time::Duration;

use scrolly_core::content::ContentSlot;
use scrolly_core::ids::SegmentId;

/// Delay between fading content out and fading the replacement in. Matches
/// the CSS opacity transition of the sticky containers.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(500);

/// Identifies one scheduled task. A token becomes stale once its task runs or
/// is superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskToken(u64);

impl TaskToken {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// What a task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Fade in the slot matching the entered step.
    RevealSlot,
    /// Swap the image source and fade it back in.
    SwapImage,
}

/// Work the driver must run after `delay` by calling
/// `TransitionEngine::run_task(token)`. Once the token is no longer pending the
/// timer can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Token to pass back to the engine.
    pub token: TaskToken,
    /// Kind of work.
    pub kind: TaskKind,
    /// How long to wait.
    pub delay: Duration,
}

/// The deferred mutation behind a token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingTask {
    Reveal {
        segment: SegmentId,
        slot: ContentSlot,
    },
    Swap {
        segment: SegmentId,
        source: String,
        alt_text: String,
    },
}

impl PendingTask {
    pub(crate) fn kind(&self) -> TaskKind {
        match self {
            Self::Reveal { .. } => TaskKind::RevealSlot,
            Self::Swap { .. } => TaskKind::SwapImage,
        }
    }
}
