//! Core library for form field extraction.
//!
//! This crate provides:
//! - PDF layout extraction (glyph positions, fonts and page size via lopdf)
//! - Segmentation of text lines into `key: value` fields
//! - Rule-based type inference for keys and values
//! - Document records with a stable JSON shape, and regression diffing between them

pub mod compare;
pub mod error;
pub mod fields;
pub mod models;
pub mod pdf;

pub use compare::{DocumentDiff, FieldAspect, FieldMismatch, compare_documents};
pub use error::{ExtractionError, FormscanError, PdfError, Result};
pub use fields::{DocumentExtractor, ExtractionResult, FieldTableBuilder, classify, split_key_value};
pub use models::config::{CompareConfig, FormscanConfig, OutputConfig, PdfConfig};
pub use models::document::{
    Coordinates, DocumentRecord, FieldRecord, FieldTable, FontDescriptor, MetaData, Separator, SheetSize,
};
pub use models::types::{DateFormat, TextClass, TypeInfo};
pub use pdf::{BBox, Glyph, LayoutProvider, PageSize, PdfExtractor, TextLine};
