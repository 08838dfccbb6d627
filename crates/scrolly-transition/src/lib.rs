//! Scrolly transition: drives the sticky pane as steps scroll into view.
//!
//! The engine consumes step-entered events, decides whether the pane needs a
//! cross-content transition, and updates the pane through the
//! `StickySurface` port. Delayed work is handed back to the caller as
//! scheduled tasks so the engine itself never touches a timer.

pub mod application;
pub mod domain;
