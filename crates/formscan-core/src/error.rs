//! Error types for the formscan-core library.

use thiserror::Error;

/// Main error type for the formscan library.
#[derive(Error, Debug)]
pub enum FormscanError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to decode a page content stream.
    #[error("failed to decode content of page {page}: {reason}")]
    Content { page: u32, reason: String },

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// No document has been loaded yet.
    #[error("no document loaded")]
    NotLoaded,
}

/// Errors related to field table extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The page has no extractable geometry; no document is produced.
    #[error("page size unavailable")]
    PageSizeUnavailable,

    /// A serialized record could not be interpreted.
    #[error("invalid {field}: {value:?}")]
    InvalidRecord { field: String, value: String },
}

/// Result type for the formscan library.
pub type Result<T> = std::result::Result<T, FormscanError>;
