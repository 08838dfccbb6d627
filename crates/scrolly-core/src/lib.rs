//! Scrolly Core: shared abstractions.
//!
//! This crate defines the identifiers, content types, error type and the
//! ports (sticky surface, map backend, row source) that every other crate
//! depends on. It contains no infrastructure code.

pub mod clock;
pub mod content;
pub mod error;
pub mod ids;
pub mod map;
pub mod source;
pub mod surface;
