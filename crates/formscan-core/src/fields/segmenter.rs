//! Key/value segmentation of a glyph line.

use crate::models::document::Separator;
use crate::pdf::TextLine;

/// Character splitting key from value. Only its first occurrence separates.
pub const SEPARATOR_CHAR: char = ':';

/// Phase of the left-to-right scan over a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// Collecting key glyphs until the first separator.
    InKey,
    /// Everything after the first separator.
    InValue,
}

/// Distinct (font name, font size) pairs of a run, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontAccumulator {
    fonts: Vec<(String, f64)>,
}

impl FontAccumulator {
    pub fn add(&mut self, name: &str, size: f64) {
        if !self.fonts.iter().any(|(n, s)| n == name && *s == size) {
            self.fonts.push((name.to_string(), size));
        }
    }

    /// The font of the first glyph of the run.
    pub fn first(&self) -> Option<(&str, f64)> {
        self.fonts.first().map(|(n, s)| (n.as_str(), *s))
    }

    /// True when glyphs of the run disagree on font name or size.
    pub fn is_mixed(&self) -> bool {
        self.fonts.len() > 1
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Raw text and fonts of a key or value run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphRun {
    pub text: String,
    pub fonts: FontAccumulator,
    pub glyph_count: usize,
}

impl GlyphRun {
    fn push(&mut self, ch: char, font: Option<(&str, f64)>) {
        self.text.push(ch);
        self.glyph_count += 1;
        if let Some((name, size)) = font {
            self.fonts.add(name, size);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.glyph_count == 0
    }
}

/// A line split into key run, separator and value run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedLine {
    pub key: GlyphRun,
    pub separator: Separator,
    pub value: GlyphRun,
    /// `(x0, y0)` of the first glyph of the line.
    pub anchor: Option<(f64, f64)>,
}

/// Two-phase scanner shared by glyph lines and plain text.
struct LineScanner {
    phase: ScanPhase,
    line: SegmentedLine,
}

impl LineScanner {
    fn new() -> Self {
        Self {
            phase: ScanPhase::InKey,
            line: SegmentedLine::default(),
        }
    }

    fn push(&mut self, ch: char, font: Option<(&str, f64)>) {
        match self.phase {
            ScanPhase::InKey if ch == SEPARATOR_CHAR => {
                self.line.separator = Separator::Colon;
                self.phase = ScanPhase::InValue;
            }
            ScanPhase::InKey => self.line.key.push(ch, font),
            ScanPhase::InValue => self.line.value.push(ch, font),
        }
    }

    fn finish(self) -> SegmentedLine {
        self.line
    }
}

/// Split a glyph line at its first colon.
///
/// A line without a colon is all key, with an empty value and no separator.
pub fn segment(line: &TextLine) -> SegmentedLine {
    let mut scanner = LineScanner::new();
    scanner.line.anchor = line.glyphs.first().map(|g| (g.bbox.x0, g.bbox.y0));

    for glyph in &line.glyphs {
        scanner.push(glyph.ch, Some((glyph.font_name.as_str(), glyph.font_size)));
    }

    scanner.finish()
}

/// Split plain text into trimmed key, trimmed value and separator.
pub fn split_key_value(text: &str) -> (String, String, Separator) {
    let mut scanner = LineScanner::new();
    for ch in text.chars() {
        scanner.push(ch, None);
    }

    let line = scanner.finish();
    (
        line.key.text.trim().to_string(),
        line.value.text.trim().to_string(),
        line.separator,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{BBox, Glyph};

    fn line(parts: &[(&str, &str)]) -> TextLine {
        let mut glyphs = Vec::new();
        let mut x = 10.0;
        for (text, font) in parts {
            for ch in text.chars() {
                glyphs.push(Glyph::new(ch, BBox::new(x, 50.0, x + 5.0, 58.0), *font, 8.0));
                x += 5.0;
            }
        }
        TextLine::new(glyphs)
    }

    fn split(text: &str) -> (String, String, Separator) {
        split_key_value(text)
    }

    #[test]
    fn test_split_key_value() {
        assert_eq!(
            split("DESCRIPTION: PART"),
            ("DESCRIPTION".into(), "PART".into(), Separator::Colon)
        );
        assert_eq!(
            split("DESCRIPTION PART"),
            ("DESCRIPTION PART".into(), "".into(), Separator::None)
        );
        assert_eq!(
            split("GRIFFON AVIATION SERVICES LLC"),
            ("GRIFFON AVIATION SERVICES LLC".into(), "".into(), Separator::None)
        );
    }

    #[test]
    fn test_only_first_colon_separates() {
        assert_eq!(
            split("DESCRIPTION: PART: 123"),
            ("DESCRIPTION".into(), "PART: 123".into(), Separator::Colon)
        );
        assert_eq!(split("TIME:: 12:30"), ("TIME".into(), ": 12:30".into(), Separator::Colon));
    }

    #[test]
    fn test_segment_tracks_fonts_per_run() {
        let segmented = segment(&line(&[("NAME:", "Arial-BoldMT"), (" BOB", "ArialMT")]));

        assert_eq!(segmented.key.text, "NAME");
        assert_eq!(segmented.value.text, " BOB");
        assert_eq!(segmented.separator, Separator::Colon);
        assert_eq!(segmented.key.fonts.first(), Some(("Arial-BoldMT", 8.0)));
        assert_eq!(segmented.value.fonts.first(), Some(("ArialMT", 8.0)));
        assert!(!segmented.key.fonts.is_mixed());
        assert_eq!(segmented.anchor, Some((10.0, 50.0)));
    }

    #[test]
    fn test_separator_glyph_in_no_run() {
        let segmented = segment(&line(&[("A:B", "ArialMT")]));
        assert_eq!(segmented.key.glyph_count, 1);
        assert_eq!(segmented.value.glyph_count, 1);
    }

    #[test]
    fn test_segment_without_separator() {
        let segmented = segment(&line(&[("SHIP TO", "ArialMT")]));

        assert_eq!(segmented.key.text, "SHIP TO");
        assert!(segmented.value.is_empty());
        assert!(segmented.value.fonts.is_empty());
        assert_eq!(segmented.separator, Separator::None);
    }

    #[test]
    fn test_font_accumulator_first_seen_order() {
        let segmented = segment(&line(&[("AB", "Courier"), ("CD", "Times-Roman"), ("E", "Courier")]));

        assert!(segmented.key.fonts.is_mixed());
        assert_eq!(
            segmented.key.fonts.fonts,
            vec![("Courier".to_string(), 8.0), ("Times-Roman".to_string(), 8.0)]
        );
        assert_eq!(segmented.key.fonts.first(), Some(("Courier", 8.0)));
    }

    #[test]
    fn test_segment_empty_line() {
        let segmented = segment(&TextLine::default());
        assert_eq!(segmented, SegmentedLine::default());
        assert!(segmented.anchor.is_none());
    }
}
