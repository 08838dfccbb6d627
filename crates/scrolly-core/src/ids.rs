//! Step and segment identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based position of a step in the story's ordered step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepNumber(pub u32);

impl StepNumber {
    /// The first step of a story.
    pub const FIRST: Self = Self(1);

    /// Returns the following step number.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Distance between two step numbers, regardless of scroll direction.
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The 1-based source row of this step, counting the header row.
    #[must_use]
    pub fn source_line(self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for StepNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifies a scrolly segment by the step number of its first member.
///
/// Step numbers are unique and monotonic, so this is unique across a whole
/// document and stable across rebuilds of the same step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub StepNumber);

impl SegmentId {
    /// DOM id of this segment's map slot.
    #[must_use]
    pub fn map_container_id(self) -> String {
        format!("sticky-map-container-{}", self.0)
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
