//! Class map line matching

use crate::record::ClassSizeRecord;
use crate::sanitize::sanitize_class_name;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Literal token that every class line carries
pub const CLASS_MARKER: &str = "@@ Class";

/// `@@ Class <size> <classname>`, unanchored.
///
/// Whitespace also covers the ASCII separators U+001C..U+001F, which the
/// Unicode `White_Space` property behind `\s` leaves out.
static CLASS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@@ Class[\s\x1c-\x1f]+(\d+)[\s\x1c-\x1f]+([^\s\x1c-\x1f]+)")
        .expect("class line pattern is valid")
});

/// Whether the line carries the class marker at all
pub fn has_marker(line: &str) -> bool {
    line.contains(CLASS_MARKER)
}

/// Match a line against the class pattern.
///
/// Lines without the marker are rejected before the regex runs. The first
/// match in the line wins; the captured name is sanitized, the size is kept
/// as captured.
pub fn parse_line(line: &str) -> Option<ClassSizeRecord> {
    if !has_marker(line) {
        return None;
    }
    match_class_line(line)
}

/// Run the full pattern on a line already known to carry the marker
pub(crate) fn match_class_line(line: &str) -> Option<ClassSizeRecord> {
    let caps = CLASS_LINE.captures(line)?;
    let size = caps.get(1)?.as_str();
    let class_name = caps.get(2)?.as_str();
    Some(ClassSizeRecord::new(sanitize_class_name(class_name), size))
}

/// Decode raw bytes as UTF-8, dropping any invalid sequences.
///
/// Borrows when the input is already valid.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}
