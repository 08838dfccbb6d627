//! Deterministic `Clock` implementation for tests.

use chrono::{DateTime, Utc};
use scrolly_core::clock::Clock;

/// A clock that always returns a fixed point in time, so `fetchedAt` values
/// and version hashes are stable across test runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
