//! Scrolly story: validation and content building.
//!
//! Turns raw sheet rows into validated story and step records, groups the
//! steps into scrolly segments separated by text breaks, and describes which
//! page regions the story fields are written into.

pub mod application;
pub mod domain;
