//! The segmented document produced by the content builder.

use scrolly_core::content::ContentSlot;
use scrolly_core::ids::{SegmentId, StepNumber};

use super::step::StepRecord;

/// A step together with its position in the story.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedStep {
    /// 1-based position.
    pub number: StepNumber,
    /// The validated record.
    pub record: StepRecord,
}

/// The sticky pane paired with one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyPlaceholder {
    /// The owning segment.
    pub segment: SegmentId,
}

impl StickyPlaceholder {
    /// The slots every placeholder holds, in DOM order.
    #[must_use]
    pub fn slots(&self) -> [ContentSlot; 3] {
        ContentSlot::ALL
    }

    /// DOM id of the map slot.
    #[must_use]
    pub fn map_container_id(&self) -> String {
        self.segment.map_container_id()
    }
}

/// A maximal run of consecutive non-text steps sharing one sticky pane.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Keyed by the first member's step number.
    pub id: SegmentId,
    /// Member steps, never empty.
    pub steps: Vec<PlacedStep>,
    /// Placeholder rendered immediately after the steps.
    pub sticky: StickyPlaceholder,
}

/// A text break rendered outside any segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// 1-based position.
    pub number: StepNumber,
    /// Sanitized HTML body.
    pub text: String,
}

/// One top-level block of the content section.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Scrolly steps plus their sticky pane.
    Scrolly(Segment),
    /// A standalone text break.
    Text(TextBlock),
}

/// Widths applied to segment containers and sticky panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    /// Width of each steps column, in percent.
    pub steps_width: f64,
    /// Width of each sticky pane, in percent.
    pub sticky_width: f64,
}

impl SplitLayout {
    /// Derives the split from the story's percentage.
    ///
    /// Only percentages strictly between 1 and 99 produce a layout; the
    /// boundary values leave the default styling in place.
    #[must_use]
    pub fn from_percentage(percentage: Option<f64>) -> Option<Self> {
        let steps_width = percentage?;
        (steps_width > 1.0 && steps_width < 99.0).then(|| Self {
            steps_width,
            sticky_width: 100.0 - steps_width,
        })
    }
}

/// The full content section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStructure {
    /// Blocks in story order.
    pub blocks: Vec<Block>,
    /// Custom horizontal split, if the story asks for one.
    pub layout: Option<SplitLayout>,
}

impl DocumentStructure {
    /// Applies the story's horizontal split to every segment and sticky pane.
    pub fn apply_split(&mut self, percentage: Option<f64>) {
        self.layout = SplitLayout::from_percentage(percentage);
    }

    /// Iterates over the scrolly segments, skipping text blocks.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Scrolly(segment) => Some(segment),
            Block::Text(_) => None,
        })
    }

    /// Iterates over every scrolly step in document order, with its segment.
    ///
    /// This is the order in which the scroll detector indexes step elements.
    pub fn scrolly_steps(&self) -> impl Iterator<Item = (SegmentId, &PlacedStep)> {
        self.segments()
            .flat_map(|segment| segment.steps.iter().map(move |step| (segment.id, step)))
    }
}
