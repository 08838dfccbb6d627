//! Fetches story rows from a published Google Sheet.

use async_trait::async_trait;
use reqwest::Client;
use scrolly_core::error::ScrollyError;
use scrolly_core::source::{RowSource, SheetRows};
use tracing::{debug, instrument, warn};

use crate::response::{BatchGetResponse, ErrorEnvelope};

/// Tabs fetched from the sheet, in request order.
pub const SHEET_NAMES: [&str; 2] = ["Story", "Steps"];

/// Base URL of the Sheets API v4 spreadsheets resource.
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Id used when the sheet URL has no `/d/<id>` segment. The API answers it
/// with a not-found error, which is reported like any other fetch failure.
pub const INVALID_SPREADSHEET_ID: &str = "InvalidGoogleSheetURL";

/// Extracts the spreadsheet id from a sheet URL such as
/// `https://docs.google.com/spreadsheets/d/<id>/edit`.
#[must_use]
pub fn spreadsheet_id_from_url(url: &str) -> String {
    url.match_indices("/d/")
        .map(|(index, marker)| {
            url[index + marker.len()..]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .find(|id| !id.is_empty())
        .unwrap_or_else(|| INVALID_SPREADSHEET_ID.to_owned())
}

/// Maps an API error message to a fetch error.
///
/// A message about an unparsable range that names one of the tabs means the
/// tab does not exist, which gets its own message.
#[must_use]
pub fn api_error(action: &str, message: &str) -> ScrollyError {
    let missing = SHEET_NAMES
        .into_iter()
        .find(|name| message.contains(*name) && message.contains("Unable to parse range"));
    match missing {
        Some(name) => ScrollyError::fetch(
            action,
            format!("Sheet name \"{name}\" not found in the Google Sheet."),
        ),
        None => ScrollyError::fetch(action, message),
    }
}

/// Converts a batch response into rows.
///
/// The story row is the first row after the `Story` header. The whole
/// `Steps` tab is returned, header included.
///
/// # Errors
///
/// Returns a fetch error if a tab is missing from the response or the
/// `Story` tab has no data row.
pub fn rows_from_response(
    response: &BatchGetResponse,
    action: &str,
) -> Result<SheetRows, ScrollyError> {
    let mut tabs = response.value_ranges.iter();
    let story = tabs.next().ok_or_else(|| missing_tab(action, SHEET_NAMES[0]))?;
    let steps = tabs.next().ok_or_else(|| missing_tab(action, SHEET_NAMES[1]))?;

    let story_row = story.string_rows().into_iter().nth(1).ok_or_else(|| {
        ScrollyError::fetch(action, "The \"Story\" sheet has no story row")
            .with_hint("The story goes on the 2nd row of the \"Story\" sheet, under the header row")
    })?;

    Ok(SheetRows {
        story_row,
        step_rows: steps.string_rows(),
    })
}

fn missing_tab(action: &str, name: &str) -> ScrollyError {
    ScrollyError::fetch(action, format!("Sheet name \"{name}\" not found in the Google Sheet."))
}

/// A `RowSource` backed by the Sheets API.
#[derive(Debug, Clone)]
pub struct GoogleSheetSource {
    client: Client,
    sheet_url: String,
    api_key: String,
    api_base: String,
}

impl GoogleSheetSource {
    /// Creates a source for the sheet at `sheet_url`, authenticated with
    /// `api_key`.
    #[must_use]
    pub fn new(sheet_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            sheet_url: sheet_url.into(),
            api_key: api_key.into(),
            api_base: SHEETS_API_BASE.to_owned(),
        }
    }

    /// Points the source at another API host.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// The id of the configured spreadsheet.
    #[must_use]
    pub fn spreadsheet_id(&self) -> String {
        spreadsheet_id_from_url(&self.sheet_url)
    }

    /// The `batchGet` URL, without the API key.
    #[must_use]
    pub fn batch_get_url(&self) -> String {
        format!(
            "{}/{}/values:batchGet",
            self.api_base.trim_end_matches('/'),
            self.spreadsheet_id()
        )
    }

    /// Action reported on every failure of this source.
    #[must_use]
    pub fn action(&self) -> String {
        format!("Fetching data from Google Sheet {}", self.sheet_url)
    }
}

#[async_trait]
impl RowSource for GoogleSheetSource {
    #[instrument(skip(self), fields(spreadsheet_id = %self.spreadsheet_id()))]
    async fn fetch_rows(&self) -> Result<SheetRows, ScrollyError> {
        let action = self.action();
        let mut query: Vec<(&str, &str)> =
            SHEET_NAMES.iter().map(|name| ("ranges", *name)).collect();
        query.push(("key", self.api_key.as_str()));

        let response = self
            .client
            .get(self.batch_get_url())
            .query(&query)
            .send()
            .await
            .map_err(|e| ScrollyError::fetch(&action, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ScrollyError::fetch(&action, e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| status.to_string());
            warn!(status = status.as_u16(), %message, "Sheets API returned an error");
            return Err(api_error(&action, &message));
        }

        let batch: BatchGetResponse = serde_json::from_str(&body)
            .map_err(|e| ScrollyError::fetch(&action, e.to_string()))?;
        let rows = rows_from_response(&batch, &action)?;
        debug!(step_rows = rows.step_rows.len(), "Fetched sheet rows");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTION: &str = "Fetching data from Google Sheet test";

    #[test]
    fn test_spreadsheet_id_is_extracted() {
        let url = "https://docs.google.com/spreadsheets/d/1Nkq7DLe-cF_xg/edit#gid=0";
        assert_eq!(spreadsheet_id_from_url(url), "1Nkq7DLe-cF_xg");
    }

    #[test]
    fn test_invalid_url_yields_placeholder_id() {
        assert_eq!(spreadsheet_id_from_url("https://example.com/sheet"), INVALID_SPREADSHEET_ID);
        assert_eq!(spreadsheet_id_from_url("https://example.com/d/"), INVALID_SPREADSHEET_ID);
    }

    #[test]
    fn test_unparsable_range_naming_a_tab_is_a_missing_sheet() {
        let err = api_error(ACTION, "Unable to parse range: Steps");

        assert_eq!(err.message, "Sheet name \"Steps\" not found in the Google Sheet.");
        assert_eq!(err.action, ACTION);
    }

    #[test]
    fn test_other_api_errors_keep_their_message() {
        let err = api_error(ACTION, "API key not valid. Please pass a valid API key.");

        assert_eq!(err.message, "API key not valid. Please pass a valid API key.");
    }

    #[test]
    fn test_story_tab_without_data_row_is_an_error() {
        // Arrange
        let response: BatchGetResponse = serde_json::from_value(serde_json::json!({
            "valueRanges": [
                { "values": [["scrollType", "title"]] },
                { "values": [["contentType"]] }
            ]
        }))
        .unwrap();

        // Act
        let err = rows_from_response(&response, ACTION).unwrap_err();

        // Assert
        assert_eq!(err.message, "The \"Story\" sheet has no story row");
    }
}
