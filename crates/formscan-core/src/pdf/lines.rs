//! Grouping of positioned glyphs into text lines.

use tracing::trace;

use super::{Glyph, TextLine};

/// Parameters for line grouping.
#[derive(Debug, Clone, Copy)]
pub struct LineGrouping {
    /// Maximum distance between glyph baselines for them to share a row.
    pub line_tolerance: f64,
    /// Horizontal gap, relative to glyph width, that splits a row into two lines.
    pub char_margin: f64,
}

impl Default for LineGrouping {
    fn default() -> Self {
        Self {
            line_tolerance: 1.0,
            char_margin: 2.0,
        }
    }
}

/// Group glyphs into lines.
///
/// Rows are clustered by baseline and ordered top to bottom (PDF y axis grows
/// upwards), glyphs within a row left to right. Lines made only of whitespace
/// are dropped.
pub fn group_into_lines(glyphs: Vec<Glyph>, grouping: &LineGrouping) -> Vec<TextLine> {
    if glyphs.is_empty() {
        return Vec::new();
    }

    let mut sorted = glyphs;
    sorted.sort_by(|a, b| {
        b.baseline
            .total_cmp(&a.baseline)
            .then(a.bbox.x0.total_cmp(&b.bbox.x0))
    });

    let mut rows: Vec<Vec<Glyph>> = Vec::new();
    let mut row_y = f64::NAN;

    for glyph in sorted {
        match rows.last_mut() {
            Some(row) if (row_y - glyph.baseline).abs() <= grouping.line_tolerance => row.push(glyph),
            _ => {
                row_y = glyph.baseline;
                rows.push(vec![glyph]);
            }
        }
    }

    let mut lines = Vec::new();
    for mut row in rows {
        row.sort_by(|a, b| a.bbox.x0.total_cmp(&b.bbox.x0));

        let mut current: Vec<Glyph> = Vec::new();
        for glyph in row {
            if let Some(prev) = current.last() {
                let gap = glyph.bbox.x0 - prev.bbox.x1;
                if gap > split_threshold(prev, &glyph, grouping.char_margin) {
                    trace!("Splitting row at x={:.3} (gap {:.3})", glyph.bbox.x0, gap);
                    push_line(&mut lines, std::mem::take(&mut current));
                }
            }
            current.push(glyph);
        }
        push_line(&mut lines, current);
    }

    lines
}

fn split_threshold(prev: &Glyph, next: &Glyph, char_margin: f64) -> f64 {
    let width = prev.bbox.width().max(next.bbox.width());
    // Zero-width glyphs fall back to half an em
    let width = if width > 0.0 {
        width
    } else {
        prev.font_size.max(next.font_size) * 0.5
    };
    width * char_margin
}

fn push_line(lines: &mut Vec<TextLine>, glyphs: Vec<Glyph>) {
    if glyphs.iter().any(|g| !g.ch.is_whitespace()) {
        lines.push(TextLine::new(glyphs));
    }
}
