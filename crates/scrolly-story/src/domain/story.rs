//! Story-level records.

use serde::{Deserialize, Serialize};

/// Story sheet row as fetched, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStory {
    /// Column A.
    pub scroll_type: String,
    /// Column B.
    pub title: String,
    /// Column C.
    pub subtitle: String,
    /// Column D.
    pub end_text: String,
    /// Column E, optionally with a trailing `%`.
    pub text_horizontal_percentage: String,
    /// Column F.
    pub authors: String,
    /// Column G.
    pub footer: String,
}

impl RawStory {
    /// Reads a story row. Missing trailing cells read as empty.
    #[must_use]
    pub fn from_row(row: &[String]) -> Self {
        Self {
            scroll_type: cell(row, 0),
            title: cell(row, 1),
            subtitle: cell(row, 2),
            end_text: cell(row, 3),
            text_horizontal_percentage: cell(row, 4),
            authors: cell(row, 5),
            footer: cell(row, 6),
        }
    }
}

/// A validated story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    /// Layout variant requested by the author.
    pub scroll_type: String,
    /// Story title, shown in the page header and browser tab.
    pub title: String,
    /// Subtitle under the title.
    pub subtitle: String,
    /// Closing text after the last step.
    pub end_text: String,
    /// Share of the horizontal space given to the steps column.
    pub text_horizontal_percentage: Option<f64>,
    /// Author byline.
    pub authors: String,
    /// Page footer.
    pub footer: String,
}

pub(crate) fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_reads_columns_in_order() {
        let row: Vec<String> = ["scrolly", "Title", "Sub", "End", "40%", "Ann", "Foot"]
            .into_iter()
            .map(str::to_owned)
            .collect();

        let raw = RawStory::from_row(&row);

        assert_eq!(raw.scroll_type, "scrolly");
        assert_eq!(raw.title, "Title");
        assert_eq!(raw.text_horizontal_percentage, "40%");
        assert_eq!(raw.footer, "Foot");
    }

    #[test]
    fn test_from_row_fills_missing_cells() {
        let raw = RawStory::from_row(&["scrolly".to_owned(), "Title".to_owned()]);

        assert_eq!(raw.title, "Title");
        assert_eq!(raw.subtitle, "");
        assert_eq!(raw.footer, "");
    }
}
