//! Transition engine and map adapter.

pub mod engine;
pub mod map_adapter;
