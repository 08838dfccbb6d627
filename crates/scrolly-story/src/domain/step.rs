//! Step-level records.

use scrolly_core::content::ContentType;
use serde::{Deserialize, Serialize};

use super::story::cell;

/// Steps sheet row as fetched, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStep {
    /// Column A.
    pub content_type: String,
    /// Column B.
    pub file_path: String,
    /// Column C.
    pub alt_text: String,
    /// Column D.
    pub latitude: String,
    /// Column E.
    pub longitude: String,
    /// Column F.
    pub zoom_level: String,
    /// Column G.
    pub text: String,
}

impl RawStep {
    /// Reads a step row. Missing trailing cells read as empty.
    #[must_use]
    pub fn from_row(row: &[String]) -> Self {
        Self {
            content_type: cell(row, 0),
            file_path: cell(row, 1),
            alt_text: cell(row, 2),
            latitude: cell(row, 3),
            longitude: cell(row, 4),
            zoom_level: cell(row, 5),
            text: cell(row, 6),
        }
    }
}

/// Image shown in the sticky pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    /// Image URL.
    pub file_path: String,
    /// Alt text.
    pub alt_text: String,
    /// Optional scale factor taken from the zoom column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// Embedded video shown in the sticky pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    /// Embeddable player URL.
    pub file_path: String,
    /// Accessible label of the player.
    pub alt_text: String,
}

/// Map camera placement shown in the sticky pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPlacement {
    /// Latitude in `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in `[-180, 180]`.
    pub longitude: f64,
    /// Requested zoom. Not clamped until display.
    pub zoom: f64,
}

/// Map content with its accessible label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapContent {
    /// Accessible label of the map.
    pub alt_text: String,
    /// Camera placement.
    #[serde(flatten)]
    pub placement: MapPlacement,
}

/// What a step shows, tagged by content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contentType", rename_all = "lowercase")]
pub enum StepContent {
    /// An image step.
    Image(ImageContent),
    /// A map step.
    Map(MapContent),
    /// A video step.
    Video(VideoContent),
    /// A text break.
    Text,
}

/// A validated step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Caption for scrolly steps, body for text breaks. Sanitized HTML.
    pub text: String,
    /// Content shown while the step is active.
    #[serde(flatten)]
    pub content: StepContent,
}

impl StepRecord {
    /// The step's content type.
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        match self.content {
            StepContent::Image(_) => ContentType::Image,
            StepContent::Map(_) => ContentType::Map,
            StepContent::Video(_) => ContentType::Video,
            StepContent::Text => ContentType::Text,
        }
    }

    /// Whether the step breaks the scrolly flow.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.content, StepContent::Text)
    }

    /// The image or video URL, if the step has one.
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        match &self.content {
            StepContent::Image(image) => Some(&image.file_path),
            StepContent::Video(video) => Some(&video.file_path),
            StepContent::Map(_) | StepContent::Text => None,
        }
    }

    /// The alt text, if the step has one.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        match &self.content {
            StepContent::Image(image) => Some(&image.alt_text),
            StepContent::Video(video) => Some(&video.alt_text),
            StepContent::Map(map) => Some(&map.alt_text),
            StepContent::Text => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_step() -> StepRecord {
        StepRecord {
            text: "Over the bay".to_owned(),
            content: StepContent::Map(MapContent {
                alt_text: "Bay area".to_owned(),
                placement: MapPlacement {
                    latitude: 37.8,
                    longitude: -122.4,
                    zoom: 9.0,
                },
            }),
        }
    }

    #[test]
    fn test_accessors_follow_content() {
        let step = map_step();

        assert_eq!(step.content_type(), ContentType::Map);
        assert_eq!(step.alt_text(), Some("Bay area"));
        assert_eq!(step.file_path(), None);
        assert!(!step.is_text());
    }

    #[test]
    fn test_serializes_flat_with_content_type_tag() {
        let json = serde_json::to_value(map_step()).unwrap();

        assert_eq!(json["contentType"], "map");
        assert_eq!(json["altText"], "Bay area");
        assert_eq!(json["latitude"], 37.8);
        assert_eq!(json["text"], "Over the bay");
    }

    #[test]
    fn test_deserializes_text_step() {
        let json = serde_json::json!({ "contentType": "text", "text": "Meanwhile" });

        let step: StepRecord = serde_json::from_value(json).unwrap();

        assert!(step.is_text());
        assert_eq!(step.text, "Meanwhile");
    }
}
