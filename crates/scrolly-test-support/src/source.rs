//! Mock `RowSource` implementations for tests.

use async_trait::async_trait;
use scrolly_core::error::ScrollyError;
use scrolly_core::source::{RowSource, SheetRows};

/// A row source that returns the same rows on every call.
#[derive(Debug, Clone)]
pub struct StaticRowSource(pub SheetRows);

#[async_trait]
impl RowSource for StaticRowSource {
    async fn fetch_rows(&self) -> Result<SheetRows, ScrollyError> {
        Ok(self.0.clone())
    }
}

/// A row source that always fails with the configured error. Useful for
/// testing error-handling paths.
#[derive(Debug, Clone)]
pub struct FailingRowSource(pub ScrollyError);

impl FailingRowSource {
    /// A source failing the way an unreachable Sheets API does.
    #[must_use]
    pub fn unreachable() -> Self {
        Self(ScrollyError::fetch(
            "Fetching data from Google Sheet https://docs.google.com/spreadsheets/d/test",
            "connection refused",
        ))
    }
}

#[async_trait]
impl RowSource for FailingRowSource {
    async fn fetch_rows(&self) -> Result<SheetRows, ScrollyError> {
        Err(self.0.clone())
    }
}
