//! Fetched rows to a validated story.

use scrolly_core::error::ScrollyError;
use scrolly_core::source::SheetRows;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::validation::{validate_steps, validate_story};
use crate::domain::step::{RawStep, StepRecord};
use crate::domain::story::{RawStory, StoryRecord};

/// Action reported for story-row failures.
pub const STORY_ACTION: &str = "Reading Google Sheet story tab (1st sheet)";
/// Action prefix reported for step-row failures.
pub const STEPS_ACTION: &str = "Reading Google Sheet Steps Tab (2nd sheet)";

/// A story and its steps, both validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedStory {
    /// The story record.
    pub story: StoryRecord,
    /// Steps in story order.
    pub steps: Vec<StepRecord>,
}

/// Validates fetched rows. The first step row is a header and is skipped.
///
/// # Errors
///
/// Returns the first validation error. No partial story is produced.
#[instrument(skip_all, fields(step_rows = rows.step_rows.len()))]
pub fn prepare_story(rows: &SheetRows) -> Result<PreparedStory, ScrollyError> {
    let story = validate_story(&RawStory::from_row(&rows.story_row), STORY_ACTION)?;

    let raw_steps: Vec<RawStep> = rows
        .step_rows
        .iter()
        .skip(1)
        .map(|row| RawStep::from_row(row))
        .collect();
    let steps = validate_steps(&raw_steps, STEPS_ACTION)?;

    debug!(steps = steps.len(), "Prepared story");
    Ok(PreparedStory { story, steps })
}
