//! Validation, document building and the fetch-to-payload pipeline.

pub mod builder;
pub mod pipeline;
pub mod regions;
pub mod validation;
