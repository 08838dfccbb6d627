//! Engine state and scheduled tasks.

pub mod context;
pub mod schedule;
pub mod sticky;
