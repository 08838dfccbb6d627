//! Markup sanitization for untrusted sheet cells.

use std::collections::HashSet;

/// Cleans a rich-text cell, keeping a safe subset of HTML.
///
/// Script, style and event-handler markup is removed; formatting tags and
/// links survive.
#[must_use]
pub fn sanitize_markup(raw: &str) -> String {
    ammonia::clean(raw)
}

/// Cleans a plain-text cell by removing every tag.
///
/// The result is meant for attribute values and parsing, never for
/// `innerHTML`, so the entities the serializer introduces are decoded again.
/// A URL keeps its literal `&` query separators.
#[must_use]
pub fn sanitize_plain(raw: &str) -> String {
    let mut builder = ammonia::Builder::empty();
    builder.clean_content_tags(HashSet::from(["script", "style"]));
    let stripped = builder.clean(raw).to_string();
    decode_text_entities(&stripped)
}

fn decode_text_entities(text: &str) -> String {
    // `&amp;` last, so an escaped entity is not decoded twice.
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
