//! Subcommands and the helpers they share.

pub mod batch;
pub mod classify;
pub mod compare;
pub mod config;
pub mod extract;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use formscan_core::fields::{DocumentExtractor, ExtractionResult, FieldTableBuilder};
use formscan_core::models::config::FormscanConfig;
use formscan_core::models::document::DocumentRecord;
use formscan_core::pdf::PdfExtractor;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("formscan")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FormscanConfig> {
    if let Some(path) = config_path {
        return Ok(FormscanConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(FormscanConfig::from_file(&default_path)?)
    } else {
        Ok(FormscanConfig::default())
    }
}

/// Extract the field table of one PDF file.
pub fn extract_file(path: &Path, config: &FormscanConfig) -> anyhow::Result<ExtractionResult> {
    let data = fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;

    let mut extractor = PdfExtractor::from_config(&config.pdf);
    extractor.load(&data)?;

    let builder = FieldTableBuilder::from_config(&config.pdf);
    Ok(builder.extract(&extractor)?)
}

/// Serialize a document record according to the output settings.
pub fn render_document(document: &DocumentRecord, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(document.to_json_pretty()?)
    } else {
        Ok(document.to_json()?)
    }
}

/// Serialize any other report according to the output settings.
pub fn render_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
