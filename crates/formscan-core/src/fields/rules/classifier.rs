//! Type inference for key and value text.

use super::dates::detect_date_format;
use super::patterns::{DIGITS, TEXT_CLASSES};
use crate::models::types::{TextClass, TypeInfo};

/// Classify text into a semantic type.
///
/// Rules are tried in a fixed order and the first match wins:
/// digits, whitelisted date literals, character classes, then the
/// unclassified string bucket. Surrounding whitespace is ignored.
pub fn classify(text: &str) -> TypeInfo {
    let text = text.trim();
    if text.is_empty() {
        return TypeInfo::UNCLASSIFIED;
    }

    if DIGITS.is_match(text) {
        return TypeInfo::Number;
    }

    if let Some(format) = detect_date_format(text) {
        return TypeInfo::Date(format);
    }

    match detect_text_class(text) {
        Some(class) => TypeInfo::String(Some(class)),
        None => TypeInfo::UNCLASSIFIED,
    }
}

/// First character class matching the whole text.
pub fn detect_text_class(text: &str) -> Option<TextClass> {
    TEXT_CLASSES
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(class, _)| *class)
}
