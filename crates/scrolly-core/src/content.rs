//! Content types and the sticky-pane slots that display them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of content a step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A still image in the sticky pane.
    Image,
    /// A map camera placement in the sticky pane.
    Map,
    /// An embedded video player in the sticky pane.
    Video,
    /// A standalone text block that breaks the scrolly flow.
    Text,
}

impl ContentType {
    /// All content types, in the order they are listed to authors.
    pub const ALL: [Self; 4] = [Self::Image, Self::Map, Self::Video, Self::Text];

    /// Spreadsheet spelling of this content type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Map => "map",
            Self::Video => "video",
            Self::Text => "text",
        }
    }

    /// The sticky slot this content type is shown in. Text has none.
    #[must_use]
    pub fn slot(self) -> Option<ContentSlot> {
        match self {
            Self::Image => Some(ContentSlot::Image),
            Self::Map => Some(ContentSlot::Map),
            Self::Video => Some(ContentSlot::Video),
            Self::Text => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContentType;

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(UnknownContentType)
    }
}

/// One of the three content holders inside a sticky placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSlot {
    /// Holds an `<img>`.
    Image,
    /// Holds the map instance.
    Map,
    /// Holds the embedded video player.
    Video,
}

impl ContentSlot {
    /// All slots, in DOM order.
    pub const ALL: [Self; 3] = [Self::Image, Self::Map, Self::Video];

    /// CSS class of the slot's container element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Image => "sticky-image-container",
            Self::Map => "sticky-map-container",
            Self::Video => "sticky-video-container",
        }
    }
}

/// Whether a slot takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Laid out and shown.
    Visible,
    /// Removed from layout.
    Hidden,
}
