//! Field table extraction: line segmentation, normalization and type inference.

pub mod assembler;
mod builder;
pub mod normalizer;
pub mod rules;
pub mod segmenter;

pub use assembler::assemble;
pub use builder::{ExtractionResult, FieldTableBuilder};
pub use normalizer::{NormalizedField, normalize};
pub use rules::classify;
pub use segmenter::{ScanPhase, SegmentedLine, segment, split_key_value};

use crate::error::ExtractionError;
use crate::pdf::LayoutProvider;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for document extractors.
pub trait DocumentExtractor {
    /// Extract the field table of a document from its page layout.
    fn extract(&self, provider: &dyn LayoutProvider) -> crate::Result<ExtractionResult>;
}
