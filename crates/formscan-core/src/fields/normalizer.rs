//! Normalization of segmented lines into stable, rounded field attributes.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use super::segmenter::{GlyphRun, SegmentedLine};
use crate::models::document::{Coordinates, FontDescriptor, Separator};

/// Decimal places kept for coordinates, font sizes and sheet sizes.
pub const ROUND_DIGITS: u32 = 3;

/// A segmented line with trimmed text and rounded geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedField {
    pub key: String,
    pub value: String,
    pub separator: Separator,
    pub key_font: FontDescriptor,
    pub value_font: FontDescriptor,
    pub coordinates: Coordinates,
    /// The key run carried more than one font.
    pub key_fonts_mixed: bool,
    /// The value run carried more than one font.
    pub value_fonts_mixed: bool,
}

/// Round a layout measurement to [`ROUND_DIGITS`] places.
///
/// Non-finite input maps to zero.
pub fn round_measure(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(ROUND_DIGITS).normalize())
        .unwrap_or_default()
}

/// Font of a run: the first glyph's font, or the empty descriptor when the run has no glyphs.
pub fn run_font(run: &GlyphRun) -> FontDescriptor {
    match run.fonts.first() {
        Some((name, size)) => FontDescriptor::new(name, round_measure(size)),
        None => FontDescriptor::empty(),
    }
}

pub fn normalize(line: &SegmentedLine) -> NormalizedField {
    let (x0, y0) = line.anchor.unwrap_or_default();

    NormalizedField {
        key: line.key.text.trim().to_string(),
        value: line.value.text.trim().to_string(),
        separator: line.separator,
        key_font: run_font(&line.key),
        value_font: run_font(&line.value),
        coordinates: Coordinates {
            x0: round_measure(x0),
            y0: round_measure(y0),
        },
        key_fonts_mixed: line.key.fonts.is_mixed(),
        value_fonts_mixed: line.value.fonts.is_mixed(),
    }
}
