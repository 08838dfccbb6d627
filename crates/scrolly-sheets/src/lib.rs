//! Google Sheets `RowSource` for the scrolly story engine.
//!
//! Fetches the `Story` and `Steps` tabs of a published sheet in one
//! `values:batchGet` call and normalises every failure into a fetch
//! `ScrollyError`.

pub mod google_sheet;
pub mod response;
