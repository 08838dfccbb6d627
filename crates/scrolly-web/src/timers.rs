//! Browser timeouts for the engine's scheduled tasks.

use std::collections::HashMap;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use scrolly_transition::domain::schedule::{ScheduledTask, TaskToken};

fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Timeouts keyed by the token they will hand back.
///
/// Dropping a `Timeout` clears it, so pruning a superseded token cancels its
/// timer as well.
#[derive(Default)]
pub(crate) struct TimerSet {
    pending: HashMap<TaskToken, Timeout>,
}

impl TimerSet {
    /// Starts a timeout that calls `fire` with the task's token.
    pub(crate) fn schedule(
        &mut self,
        task: ScheduledTask,
        fire: impl FnOnce(TaskToken) + 'static,
    ) {
        let token = task.token;
        let timeout = Timeout::new(delay_millis(task.delay), move || fire(token));
        self.pending.insert(token, timeout);
    }

    /// Drops every timeout whose token `still_pending` rejects.
    ///
    /// Must not be called from inside a timeout callback.
    pub(crate) fn prune(&mut self, still_pending: impl Fn(TaskToken) -> bool) {
        self.pending.retain(|token, _| still_pending(*token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_is_whole_milliseconds() {
        assert_eq!(delay_millis(Duration::from_millis(500)), 500);
        assert_eq!(delay_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
