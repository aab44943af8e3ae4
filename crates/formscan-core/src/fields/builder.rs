//! Field table construction from positioned text lines.

use std::time::Instant;

use tracing::{debug, info, trace, warn};

use super::assembler::assemble;
use super::normalizer::{NormalizedField, normalize};
use super::rules::classify;
use super::segmenter::segment;
use super::{DocumentExtractor, Result};
use crate::error::ExtractionError;
use crate::models::config::PdfConfig;
use crate::models::document::{DocumentRecord, FieldRecord, FieldTable};
use crate::pdf::{LayoutProvider, PageSize, TextLine};

/// Result of field extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted document.
    pub document: DocumentRecord,
    /// Extraction warnings (mixed fonts, overwritten keys).
    pub warnings: Vec<String>,
    /// Number of lines supplied by the layout provider.
    pub line_count: usize,
    /// Lines dropped because they carried no glyphs.
    pub skipped_lines: usize,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Builds a field table from the lines of one page.
pub struct FieldTableBuilder {
    /// Page to read (1-indexed).
    page: u32,
}

impl FieldTableBuilder {
    /// Create a builder reading the first page.
    pub fn new() -> Self {
        Self { page: 1 }
    }

    /// Create a builder from configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new().with_page(config.page)
    }

    /// Set the page to read.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Build a document from already materialized page geometry and lines.
    ///
    /// Lines are processed in order. A key seen twice keeps its first
    /// position in the table but takes the later record.
    pub fn build(&self, page_size: Option<PageSize>, lines: &[TextLine]) -> Result<ExtractionResult> {
        let start = Instant::now();
        let page_size = page_size.ok_or(ExtractionError::PageSizeUnavailable)?;

        let mut body = FieldTable::new();
        let mut warnings = Vec::new();
        let mut skipped_lines = 0;

        for (index, line) in lines.iter().enumerate() {
            let line_no = index + 1;
            if line.is_empty() {
                trace!("Skipping line {} without glyphs", line_no);
                skipped_lines += 1;
                continue;
            }

            let field = normalize(&segment(line));
            collect_font_warnings(line_no, &field, &mut warnings);

            let key = field.key.clone();
            let record = field_record(field);
            if let Some(previous) = body.insert(key.clone(), record) {
                warn!("Duplicate key {:?} on line {}", key, line_no);
                warnings.push(format!(
                    "line {}: duplicate key {:?} replaces earlier value {:?}",
                    line_no, key, previous.value
                ));
            }
        }

        let document = assemble(page_size, body);
        let processing_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "Built {} fields from {} lines in {}ms",
            document.body.len(),
            lines.len(),
            processing_time_ms
        );

        Ok(ExtractionResult {
            document,
            warnings,
            line_count: lines.len(),
            skipped_lines,
            processing_time_ms,
        })
    }
}

impl Default for FieldTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for FieldTableBuilder {
    fn extract(&self, provider: &dyn LayoutProvider) -> crate::Result<ExtractionResult> {
        // Geometry gates everything else: no lines are read for a page without size.
        let page_size = provider.page_size(self.page);
        if page_size.is_none() {
            warn!("Page {} has no usable page size", self.page);
            return Err(ExtractionError::PageSizeUnavailable.into());
        }

        let lines = provider.text_lines(self.page)?;
        let result = self.build(page_size, &lines)?;
        info!(
            "Extracted {} fields from page {}",
            result.document.body.len(),
            self.page
        );
        Ok(result)
    }
}

fn field_record(field: NormalizedField) -> FieldRecord {
    FieldRecord {
        type_value: classify(&field.value),
        type_key: classify(&field.key),
        value: field.value,
        key_font_info: field.key_font,
        val_font_info: field.value_font,
        separator: field.separator,
        coordinates: field.coordinates,
    }
}

fn collect_font_warnings(line_no: usize, field: &NormalizedField, warnings: &mut Vec<String>) {
    if field.key_fonts_mixed {
        warnings.push(format!(
            "line {}: key {:?} mixes fonts, reporting {}",
            line_no, field.key, field.key_font
        ));
    }
    if field.value_fonts_mixed {
        warnings.push(format!(
            "line {}: value of {:?} mixes fonts, reporting {}",
            line_no, field.key, field.value_font
        ));
    }
}
