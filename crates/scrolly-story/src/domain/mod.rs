//! Story, step and document models.

pub mod document;
pub mod numeric;
pub mod sanitize;
pub mod step;
pub mod story;
