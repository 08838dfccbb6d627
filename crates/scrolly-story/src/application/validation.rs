//! Validation of raw story and step rows.
//!
//! Every string cell is sanitized before it is checked. Step rules run in a
//! fixed order and the first violation is returned; nothing is collected.

use scrolly_core::content::ContentType;
use scrolly_core::error::ScrollyError;
use scrolly_core::ids::StepNumber;

use crate::domain::numeric::parse_number;
use crate::domain::sanitize::{sanitize_markup, sanitize_plain};
use crate::domain::step::{
    ImageContent, MapContent, MapPlacement, RawStep, StepContent, StepRecord, VideoContent,
};
use crate::domain::story::{RawStory, StoryRecord};

const PERCENTAGE_HINT: &str = "This determines the percentage of the horizontal space the text will take up, and if specified, must be a number between 1 and 99";
const ALT_TEXT_HINT: &str = "AltText is needed to explain what an image, video, or map is displaying, for those with visual impairments";

/// Validates the story row.
///
/// # Errors
///
/// Returns a validation `ScrollyError` if `textHorizontalPercentage` is
/// present but not a number, or is `<= 0` or `>= 100`.
pub fn validate_story(raw: &RawStory, action: &str) -> Result<StoryRecord, ScrollyError> {
    let percentage = sanitize_plain(&raw.text_horizontal_percentage);
    let percentage = percentage.strip_suffix('%').unwrap_or(&percentage);

    let text_horizontal_percentage = if percentage.is_empty() {
        None
    } else {
        match parse_number(percentage) {
            Some(value) if value > 0.0 && value < 100.0 => Some(value),
            _ => {
                return Err(ScrollyError::validation(
                    action,
                    format!("Invalid TextHorizontalPercentage value \"{percentage}\""),
                )
                .with_hint(PERCENTAGE_HINT));
            }
        }
    };

    Ok(StoryRecord {
        scroll_type: sanitize_plain(&raw.scroll_type),
        title: sanitize_markup(&raw.title),
        subtitle: sanitize_markup(&raw.subtitle),
        end_text: sanitize_markup(&raw.end_text),
        text_horizontal_percentage,
        authors: sanitize_markup(&raw.authors),
        footer: sanitize_markup(&raw.footer),
    })
}

/// Validates every step row in order.
///
/// The action of a failing step names its step number and its source line,
/// e.g. `"<action>, step 3 (line 4)"`.
///
/// # Errors
///
/// Returns the first validation `ScrollyError` found.
pub fn validate_steps(rows: &[RawStep], action: &str) -> Result<Vec<StepRecord>, ScrollyError> {
    let mut number = StepNumber::FIRST;
    let mut records = Vec::with_capacity(rows.len());
    for raw in rows {
        let step_action = format!("{action}, step {number} (line {})", number.source_line());
        records.push(validate_step(raw, &step_action)?);
        number = number.next();
    }
    Ok(records)
}

/// Validates a single step row.
///
/// Rules run in this order: contentType, text, altText, latitude, longitude,
/// zoomLevel, filePath.
///
/// # Errors
///
/// Returns a validation `ScrollyError` for the first violated rule.
pub fn validate_step(raw: &RawStep, action: &str) -> Result<StepRecord, ScrollyError> {
    let step = SanitizedStep::from_raw(raw);

    let content_type = check_content_type(&step.content_type, action)?;

    if step.text.is_empty() {
        return Err(ScrollyError::validation(action, "Text is a required field"));
    }

    if content_type != ContentType::Text && step.alt_text.is_empty() {
        return Err(
            ScrollyError::validation(action, "AltText is a required field").with_hint(ALT_TEXT_HINT),
        );
    }

    let content = match content_type {
        ContentType::Map => StepContent::Map(MapContent {
            placement: check_map_placement(&step, action)?,
            alt_text: step.alt_text,
        }),
        ContentType::Image => StepContent::Image(ImageContent {
            file_path: check_file_path(&step.file_path, content_type, action)?,
            scale: parse_number(&step.zoom_level),
            alt_text: step.alt_text,
        }),
        ContentType::Video => StepContent::Video(VideoContent {
            file_path: check_file_path(&step.file_path, content_type, action)?,
            alt_text: step.alt_text,
        }),
        ContentType::Text => StepContent::Text,
    };

    Ok(StepRecord {
        text: step.text,
        content,
    })
}

struct SanitizedStep {
    content_type: String,
    file_path: String,
    alt_text: String,
    latitude: String,
    longitude: String,
    zoom_level: String,
    text: String,
}

impl SanitizedStep {
    fn from_raw(raw: &RawStep) -> Self {
        Self {
            content_type: sanitize_plain(&raw.content_type),
            file_path: sanitize_plain(&raw.file_path),
            alt_text: sanitize_plain(&raw.alt_text),
            latitude: sanitize_plain(&raw.latitude),
            longitude: sanitize_plain(&raw.longitude),
            zoom_level: sanitize_plain(&raw.zoom_level),
            text: sanitize_markup(&raw.text),
        }
    }
}

fn check_content_type(value: &str, action: &str) -> Result<ContentType, ScrollyError> {
    value.parse().map_err(|_| {
        let message = if value.is_empty() {
            "No contentType specified".to_owned()
        } else {
            format!("Invalid contentType: \"{value}\"")
        };
        let valid: Vec<&str> = ContentType::ALL.iter().map(|kind| kind.as_str()).collect();
        ScrollyError::validation(action, message)
            .with_hint(format!("Valid contentType values are: {}", valid.join(", ")))
    })
}

fn check_map_placement(step: &SanitizedStep, action: &str) -> Result<MapPlacement, ScrollyError> {
    let latitude = parse_number(&step.latitude)
        .filter(|value| (-90.0..=90.0).contains(value))
        .ok_or_else(|| {
            ScrollyError::validation(action, format!("Latitude of {} is invalid", step.latitude))
                .with_hint("Latitude must be between -90.0 and 90.0 for content type \"map\"")
        })?;

    let longitude = parse_number(&step.longitude)
        .filter(|value| (-180.0..=180.0).contains(value))
        .ok_or_else(|| {
            ScrollyError::validation(action, format!("Longitude of {} is invalid", step.longitude))
                .with_hint("Longitude must be between -180.0 and 180.0 for content type \"map\"")
        })?;

    let zoom = parse_number(&step.zoom_level).ok_or_else(|| {
        ScrollyError::validation(action, format!("ZoomLevel of \"{}\" is invalid", step.zoom_level))
            .with_hint("ZoomLevel must be a number")
    })?;

    Ok(MapPlacement {
        latitude,
        longitude,
        zoom,
    })
}

fn check_file_path(
    value: &str,
    content_type: ContentType,
    action: &str,
) -> Result<String, ScrollyError> {
    if value.is_empty() {
        return Err(
            ScrollyError::validation(action, "FilePath is a required field").with_hint(format!(
                "FilePath is the URL of the {content_type} to show for content type \"{content_type}\""
            )),
        );
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use scrolly_core::error::ErrorKind;

    use super::*;

    const ACTION: &str = "Reading steps";

    fn story_with_percentage(percentage: &str) -> RawStory {
        RawStory {
            title: "Title".to_owned(),
            text_horizontal_percentage: percentage.to_owned(),
            ..RawStory::default()
        }
    }

    fn step(content_type: &str) -> RawStep {
        RawStep {
            content_type: content_type.to_owned(),
            file_path: "https://example.com/a.png".to_owned(),
            alt_text: "Alt".to_owned(),
            text: "Caption".to_owned(),
            ..RawStep::default()
        }
    }

    fn map_step(latitude: &str, longitude: &str, zoom: &str) -> RawStep {
        RawStep {
            latitude: latitude.to_owned(),
            longitude: longitude.to_owned(),
            zoom_level: zoom.to_owned(),
            ..step("map")
        }
    }

    fn message_of(result: Result<StepRecord, ScrollyError>) -> String {
        result.unwrap_err().message
    }

    #[test]
    fn test_story_accepts_percentages_inside_range() {
        for value in ["1", "50", "99", "40%"] {
            let story = validate_story(&story_with_percentage(value), "Reading story");
            assert!(story.is_ok(), "expected {value} to be accepted");
        }
    }

    #[test]
    fn test_story_strips_percent_sign() {
        let story = validate_story(&story_with_percentage("40%"), "Reading story").unwrap();
        assert_eq!(story.text_horizontal_percentage, Some(40.0));
    }

    #[test]
    fn test_story_rejects_percentages_outside_range() {
        for value in ["0", "100", "-5", "150%"] {
            let err = validate_story(&story_with_percentage(value), "Reading story").unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
            assert_eq!(err.action, "Reading story");
            assert!(err.message.starts_with("Invalid TextHorizontalPercentage"));
            assert!(err.hint.is_some());
        }
    }

    #[test]
    fn test_story_rejects_non_numeric_percentage() {
        let result = validate_story(&story_with_percentage("wide"), "Reading story");
        assert!(result.is_err());
    }

    #[test]
    fn test_story_without_percentage_is_valid() {
        let story = validate_story(&story_with_percentage(""), "Reading story").unwrap();
        assert_eq!(story.text_horizontal_percentage, None);
    }

    #[test]
    fn test_story_fields_are_sanitized() {
        // Arrange
        let raw = RawStory {
            title: "Hello<script>alert(1)</script>".to_owned(),
            ..RawStory::default()
        };

        // Act
        let story = validate_story(&raw, "Reading story").unwrap();

        // Assert
        assert_eq!(story.title, "Hello");
    }

    #[test]
    fn test_empty_and_unknown_content_types_have_distinct_messages() {
        let empty = validate_step(&step(""), ACTION).unwrap_err();
        let bogus = validate_step(&step("bogus"), ACTION).unwrap_err();

        assert_eq!(empty.message, "No contentType specified");
        assert_eq!(bogus.message, "Invalid contentType: \"bogus\"");
        assert_eq!(
            bogus.hint.as_deref(),
            Some("Valid contentType values are: image, map, video, text")
        );
    }

    #[test]
    fn test_text_is_required_for_every_type() {
        let raw = RawStep {
            text: String::new(),
            ..step("text")
        };
        assert_eq!(message_of(validate_step(&raw, ACTION)), "Text is a required field");
    }

    #[test]
    fn test_alt_text_is_required_except_for_text() {
        let image = RawStep {
            alt_text: String::new(),
            ..step("image")
        };
        assert_eq!(message_of(validate_step(&image, ACTION)), "AltText is a required field");

        let text = RawStep {
            alt_text: String::new(),
            ..step("text")
        };
        assert!(validate_step(&text, ACTION).unwrap().is_text());
    }

    #[test]
    fn test_latitude_bounds() {
        assert!(validate_step(&map_step("90", "0", "5"), ACTION).is_ok());
        assert!(validate_step(&map_step("-90", "0", "5"), ACTION).is_ok());
        assert_eq!(
            message_of(validate_step(&map_step("91", "0", "5"), ACTION)),
            "Latitude of 91 is invalid"
        );
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(validate_step(&map_step("0", "180", "5"), ACTION).is_ok());
        assert_eq!(
            message_of(validate_step(&map_step("0", "181", "5"), ACTION)),
            "Longitude of 181 is invalid"
        );
    }

    #[test]
    fn test_map_zoom_must_be_numeric_but_is_not_range_checked() {
        assert_eq!(
            message_of(validate_step(&map_step("0", "0", "far"), ACTION)),
            "ZoomLevel of \"far\" is invalid"
        );
        assert_eq!(
            message_of(validate_step(&map_step("0", "0", ""), ACTION)),
            "ZoomLevel of \"\" is invalid"
        );

        let record = validate_step(&map_step("0", "0", "25"), ACTION).unwrap();
        match record.content {
            StepContent::Map(map) => assert!((map.placement.zoom - 25.0).abs() < f64::EPSILON),
            other => panic!("expected map content, got {other:?}"),
        }
    }

    #[test]
    fn test_coordinates_are_only_checked_for_maps() {
        let raw = RawStep {
            latitude: "999".to_owned(),
            zoom_level: "abc".to_owned(),
            ..step("image")
        };
        assert!(validate_step(&raw, ACTION).is_ok());
    }

    #[test]
    fn test_rules_run_in_fixed_order() {
        // Missing text wins over a bad latitude.
        let raw = RawStep {
            text: String::new(),
            ..map_step("91", "0", "5")
        };
        assert_eq!(message_of(validate_step(&raw, ACTION)), "Text is a required field");
    }

    #[test]
    fn test_file_path_is_required_for_image_and_video() {
        for content_type in ["image", "video"] {
            let raw = RawStep {
                file_path: String::new(),
                ..step(content_type)
            };
            assert_eq!(message_of(validate_step(&raw, ACTION)), "FilePath is a required field");
        }
    }

    #[test]
    fn test_image_zoom_becomes_optional_scale() {
        let raw = RawStep {
            zoom_level: "1.5".to_owned(),
            ..step("image")
        };

        match validate_step(&raw, ACTION).unwrap().content {
            StepContent::Image(image) => assert_eq!(image.scale, Some(1.5)),
            other => panic!("expected image content, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_steps_names_step_and_line() {
        // Arrange
        let rows = vec![step("image"), step("bogus")];

        // Act
        let err = validate_steps(&rows, ACTION).unwrap_err();

        // Assert
        assert_eq!(err.action, "Reading steps, step 2 (line 3)");
    }

    #[test]
    fn test_validate_steps_preserves_order() {
        let rows = vec![step("image"), step("text"), map_step("1", "2", "3")];

        let records = validate_steps(&rows, ACTION).unwrap();

        let kinds: Vec<ContentType> = records.iter().map(StepRecord::content_type).collect();
        assert_eq!(kinds, vec![ContentType::Image, ContentType::Text, ContentType::Map]);
    }
}
