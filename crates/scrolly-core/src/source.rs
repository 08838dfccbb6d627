//! Tabular data-source port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ScrollyError;

/// Raw cells fetched from the data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRows {
    /// The single data row of the story sheet.
    pub story_row: Vec<String>,
    /// All rows of the steps sheet. The first row is the header.
    pub step_rows: Vec<Vec<String>>,
}

/// Where story rows come from.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetches the story row and the step rows.
    ///
    /// # Errors
    ///
    /// Returns a fetch-kind `ScrollyError` if the source is unreachable or
    /// answers with an error or a malformed response.
    async fn fetch_rows(&self) -> Result<SheetRows, ScrollyError>;
}
