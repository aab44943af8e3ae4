//! PDF layout module: glyph geometry and page size.

mod extractor;
mod lines;

pub use extractor::PdfExtractor;
pub use lines::{LineGrouping, group_into_lines};

#[cfg(test)]
pub(crate) use extractor::tests::{build_pdf, build_pdf_with_runs};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Axis-aligned bounding box in PDF user space (origin at bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the width of the box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Get the height of the box.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// One rendered character with its position and font.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Decoded character.
    pub ch: char,
    /// Bounding box on the page.
    pub bbox: BBox,
    /// Font name as declared by the document (`/BaseFont`).
    pub font_name: String,
    /// Effective font size in user space units.
    pub font_size: f64,
    /// Baseline y. Glyphs of different sizes on one baseline have different `bbox.y0`.
    pub baseline: f64,
}

impl Glyph {
    /// Create a glyph whose baseline is the bottom of its box.
    pub fn new(ch: char, bbox: BBox, font_name: impl Into<String>, font_size: f64) -> Self {
        Self {
            ch,
            bbox,
            font_name: font_name.into(),
            font_size,
            baseline: bbox.y0,
        }
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }
}

/// An ordered run of glyphs forming one logical `label: value` line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLine {
    pub glyphs: Vec<Glyph>,
}

impl TextLine {
    pub fn new(glyphs: Vec<Glyph>) -> Self {
        Self { glyphs }
    }

    /// Concatenated text of the line.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }
}

/// Page dimensions taken from the page boundary box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

/// Source of page geometry and positioned glyph lines.
///
/// Everything is materialized before the field pipeline runs; implementations
/// do no work lazily on behalf of the builder.
pub trait LayoutProvider {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Size of a page (1-indexed), or `None` when the page carries no usable geometry.
    fn page_size(&self, page: u32) -> Option<PageSize>;

    /// Text lines of a page (1-indexed) in provider order.
    fn text_lines(&self, page: u32) -> Result<Vec<TextLine>>;
}
