//! Sheets API v4 response bodies.

use serde::Deserialize;
use serde_json::Value;

/// Body of a successful `values:batchGet` call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetResponse {
    /// One range per requested tab, in request order.
    #[serde(default)]
    pub value_ranges: Vec<ValueRange>,
}

/// The cells of one tab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValueRange {
    /// The A1 range actually returned.
    #[serde(default)]
    pub range: String,
    /// Rows of cells. Absent when the tab is empty; trailing empty cells are
    /// omitted by the API.
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// The rows with every cell rendered as a string.
    #[must_use]
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect()
    }
}

/// Body of a failed call.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// The error details.
    pub error: ApiError,
}

/// Error details returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// HTTP status code.
    #[serde(default)]
    pub code: u16,
    /// Human readable description.
    #[serde(default)]
    pub message: String,
    /// Canonical status name, e.g. `INVALID_ARGUMENT`.
    #[serde(default)]
    pub status: String,
}

/// Renders a cell the way the sheet displays it.
#[must_use]
pub fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_cells_render_as_strings() {
        assert_eq!(cell_to_string(&json!("map")), "map");
        assert_eq!(cell_to_string(&json!(45.5)), "45.5");
        assert_eq!(cell_to_string(&json!(true)), "true");
        assert_eq!(cell_to_string(&Value::Null), "");
    }

    #[test]
    fn test_missing_values_deserialize_as_empty() {
        // Arrange
        let body = json!({
            "spreadsheetId": "abc",
            "valueRanges": [
                { "range": "Story!A1:Z1000", "majorDimension": "ROWS", "values": [["scrollType"]] },
                { "range": "Steps!A1:Z1000", "majorDimension": "ROWS" }
            ]
        });

        // Act
        let response: BatchGetResponse = serde_json::from_value(body).unwrap();

        // Assert
        assert_eq!(response.value_ranges.len(), 2);
        assert_eq!(response.value_ranges[0].string_rows(), vec![vec!["scrollType"]]);
        assert!(response.value_ranges[1].values.is_empty());
    }

    #[test]
    fn test_error_envelope_deserializes() {
        let body = json!({
            "error": { "code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED" }
        });

        let envelope: ErrorEnvelope = serde_json::from_value(body).unwrap();

        assert_eq!(envelope.error.code, 403);
        assert_eq!(envelope.error.status, "PERMISSION_DENIED");
    }
}
