//! Story-level page regions.

use std::fmt;

use crate::domain::story::StoryRecord;

/// A page region filled from the story record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryRegion {
    /// The document `<title>`.
    BrowserTitle,
    /// The page heading.
    StoryTitle,
    /// The line under the heading.
    Subtitle,
    /// The byline.
    Authors,
    /// The closing text after the last step.
    EndText,
}

impl StoryRegion {
    /// Every region, in the order they are written.
    pub const ALL: [Self; 5] = [
        Self::StoryTitle,
        Self::BrowserTitle,
        Self::Subtitle,
        Self::Authors,
        Self::EndText,
    ];

    /// DOM id of the region.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::BrowserTitle => "browser-title",
            Self::StoryTitle => "story-title",
            Self::Subtitle => "subtitle",
            Self::Authors => "authors",
            Self::EndText => "end-text",
        }
    }
}

impl fmt::Display for StoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Somewhere story regions can be written, usually the page DOM.
pub trait StoryView {
    /// Replaces the region's markup with already sanitized HTML.
    fn set_region_html(&mut self, region: StoryRegion, html: &str);
}

/// Writes the story's title, subtitle, authors and end text into `view`.
///
/// The title goes to both the heading and the browser title. No other region
/// is touched.
pub fn render_story(story: &StoryRecord, view: &mut impl StoryView) {
    for region in StoryRegion::ALL {
        let html = match region {
            StoryRegion::BrowserTitle | StoryRegion::StoryTitle => &story.title,
            StoryRegion::Subtitle => &story.subtitle,
            StoryRegion::Authors => &story.authors,
            StoryRegion::EndText => &story.end_text,
        };
        view.set_region_html(region, html);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::application::validation::validate_story;
    use crate::domain::story::RawStory;

    #[derive(Default)]
    struct PageFake {
        regions: HashMap<&'static str, String>,
    }

    impl StoryView for PageFake {
        fn set_region_html(&mut self, region: StoryRegion, html: &str) {
            self.regions.insert(region.element_id(), html.to_owned());
        }
    }

    #[test]
    fn test_render_story_fills_exactly_the_story_regions() {
        // Arrange
        let raw = RawStory {
            scroll_type: "scrolly".to_owned(),
            title: "<b>Tides</b>".to_owned(),
            subtitle: "A year at sea<script>x()</script>".to_owned(),
            end_text: "The end".to_owned(),
            text_horizontal_percentage: "40".to_owned(),
            authors: "A. Writer".to_owned(),
            footer: "Footer text".to_owned(),
        };
        let story = validate_story(&raw, "Reading story").unwrap();
        let mut page = PageFake::default();

        // Act
        render_story(&story, &mut page);

        // Assert
        let expected: HashMap<&'static str, String> = [
            ("browser-title", "<b>Tides</b>"),
            ("story-title", "<b>Tides</b>"),
            ("subtitle", "A year at sea"),
            ("authors", "A. Writer"),
            ("end-text", "The end"),
        ]
        .into_iter()
        .map(|(id, html)| (id, html.to_owned()))
        .collect();
        assert_eq!(page.regions, expected);
    }

    #[test]
    fn test_render_story_writes_plain_fields_verbatim() {
        // Arrange
        let story = StoryRecord {
            scroll_type: "scrolly".to_owned(),
            title: "Test Title".to_owned(),
            subtitle: "Test Subtitle".to_owned(),
            end_text: "Test End Text".to_owned(),
            text_horizontal_percentage: None,
            authors: "Test Author".to_owned(),
            footer: String::new(),
        };
        let mut page = PageFake::default();

        // Act
        render_story(&story, &mut page);

        // Assert
        assert_eq!(page.regions.len(), 5);
        assert_eq!(page.regions["browser-title"], "Test Title");
        assert_eq!(page.regions["story-title"], "Test Title");
        assert_eq!(page.regions["subtitle"], "Test Subtitle");
        assert_eq!(page.regions["end-text"], "Test End Text");
        assert_eq!(page.regions["authors"], "Test Author");
    }

    #[test]
    fn test_region_ids() {
        assert_eq!(StoryRegion::BrowserTitle.to_string(), "browser-title");
        assert_eq!(StoryRegion::EndText.element_id(), "end-text");
    }
}
