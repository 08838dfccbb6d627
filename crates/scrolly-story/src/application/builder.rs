//! Groups validated steps into scrolly segments and text breaks.

use scrolly_core::ids::{SegmentId, StepNumber};
use tracing::debug;

use crate::domain::document::{
    Block, DocumentStructure, PlacedStep, Segment, StickyPlaceholder, TextBlock,
};
use crate::domain::step::StepRecord;

/// Builds the content section from validated steps.
///
/// Runs of consecutive non-text steps become segments, each followed by its
/// own sticky placeholder. A text step closes the open segment and is emitted
/// as a standalone block.
#[must_use]
pub fn build_document(steps: &[StepRecord]) -> DocumentStructure {
    let mut blocks = Vec::new();
    let mut open: Vec<PlacedStep> = Vec::new();
    let mut number = StepNumber::FIRST;

    for record in steps {
        if record.is_text() {
            close_segment(&mut open, &mut blocks);
            blocks.push(Block::Text(TextBlock {
                number,
                text: record.text.clone(),
            }));
        } else {
            open.push(PlacedStep {
                number,
                record: record.clone(),
            });
        }
        number = number.next();
    }
    close_segment(&mut open, &mut blocks);

    debug!(blocks = blocks.len(), steps = steps.len(), "Built document structure");

    DocumentStructure {
        blocks,
        layout: None,
    }
}

fn close_segment(open: &mut Vec<PlacedStep>, blocks: &mut Vec<Block>) {
    let Some(first) = open.first() else {
        return;
    };
    let id = SegmentId(first.number);
    blocks.push(Block::Scrolly(Segment {
        id,
        steps: std::mem::take(open),
        sticky: StickyPlaceholder { segment: id },
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::step::{ImageContent, StepContent};

    fn image(path: &str) -> StepRecord {
        StepRecord {
            text: format!("Caption for {path}"),
            content: StepContent::Image(ImageContent {
                file_path: path.to_owned(),
                alt_text: "Alt".to_owned(),
                scale: None,
            }),
        }
    }

    fn text(body: &str) -> StepRecord {
        StepRecord {
            text: body.to_owned(),
            content: StepContent::Text,
        }
    }

    fn shape(document: &DocumentStructure) -> Vec<String> {
        document
            .blocks
            .iter()
            .map(|block| match block {
                Block::Scrolly(segment) => {
                    let members: Vec<String> =
                        segment.steps.iter().map(|step| step.number.to_string()).collect();
                    format!("segment {} [{}]", segment.id, members.join(","))
                }
                Block::Text(text) => format!("text {}", text.number),
            })
            .collect()
    }

    #[test]
    fn test_text_steps_split_segments() {
        // Arrange
        let steps = vec![image("a"), image("b"), text("Break"), image("c"), image("d")];

        // Act
        let document = build_document(&steps);

        // Assert
        assert_eq!(
            shape(&document),
            vec!["segment 1 [1,2]", "text 3", "segment 4 [4,5]"]
        );
    }

    #[test]
    fn test_consecutive_text_steps_emit_no_empty_segments() {
        let steps = vec![text("One"), text("Two"), image("a")];

        let document = build_document(&steps);

        assert_eq!(shape(&document), vec!["text 1", "text 2", "segment 3 [3]"]);
    }

    #[test]
    fn test_each_segment_has_its_own_placeholder() {
        // Arrange
        let steps = vec![image("a"), text("Break"), image("b")];

        // Act
        let document = build_document(&steps);

        // Assert
        let containers: Vec<String> = document
            .segments()
            .map(|segment| segment.sticky.map_container_id())
            .collect();
        assert_eq!(
            containers,
            vec!["sticky-map-container-1", "sticky-map-container-3"]
        );
    }

    #[test]
    fn test_scrolly_steps_follow_document_order() {
        let steps = vec![image("a"), text("Break"), image("b"), image("c")];

        let document = build_document(&steps);

        let order: Vec<(u32, u32)> = document
            .scrolly_steps()
            .map(|(segment, step)| (segment.0.0, step.number.0))
            .collect();
        assert_eq!(order, vec![(1, 1), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_build_is_deterministic() {
        // Arrange
        let steps = vec![image("a"), text("Break"), image("b"), text("End")];

        // Act
        let first = build_document(&steps);
        let second = build_document(&steps);

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_builds_empty_document() {
        let document = build_document(&[]);

        assert!(document.blocks.is_empty());
        assert_eq!(document.layout, None);
    }
}
