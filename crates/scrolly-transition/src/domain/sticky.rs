//! Per-segment sticky pane state.

use super::schedule::TaskToken;

/// What one segment's sticky pane currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickyState {
    /// Image source last requested, used to skip redundant swaps.
    pub image_path: Option<String>,
    /// Swap task still waiting to run for this pane.
    pub(crate) pending_swap: Option<TaskToken>,
}

impl StickyState {
    /// Whether showing `path` needs a new swap.
    #[must_use]
    pub fn image_changes(&self, path: &str) -> bool {
        self.image_path.as_deref() != Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_changes_when_nothing_shown() {
        assert!(StickyState::default().image_changes("a.png"));
    }

    #[test]
    fn test_image_is_unchanged_for_same_path() {
        let state = StickyState {
            image_path: Some("a.png".to_owned()),
            ..StickyState::default()
        };

        assert!(!state.image_changes("a.png"));
        assert!(state.image_changes("b.png"));
    }
}
