//! Shared application state.

use std::sync::Arc;

use scrolly_core::clock::Clock;
use scrolly_core::source::RowSource;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to stamp fetched stories.
    pub clock: Arc<dyn Clock>,
    /// Where story rows come from.
    pub row_source: Arc<dyn RowSource>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, row_source: Arc<dyn RowSource>) -> Self {
        Self { clock, row_source }
    }
}
