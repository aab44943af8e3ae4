//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FormscanError, Result};

/// Main configuration for formscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormscanConfig {
    /// PDF layout configuration.
    pub pdf: PdfConfig,

    /// Document comparison configuration.
    pub compare: CompareConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// PDF layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Page to extract (1-indexed). Only one page is read per document.
    pub page: u32,

    /// Maximum distance between glyph baselines, in points, for glyphs to share a line.
    pub line_tolerance: f64,

    /// Horizontal gap, in glyph widths, that splits a row into separate lines.
    pub char_margin: f64,

    /// Glyph advance in thousandths of an em for fonts without a `/Widths` array.
    pub default_glyph_width: f64,

    /// Try to open encrypted documents with an empty password.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page: 1,
            line_tolerance: 1.0,
            char_margin: 2.0,
            default_glyph_width: 500.0,
            decrypt_empty_password: true,
        }
    }
}

/// Document comparison configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Report differing sheet sizes.
    pub check_sheet_size: bool,

    /// Report differing field values (off by default: values usually change between tickets).
    pub check_values: bool,

    /// Report differing separators.
    pub check_separator: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            check_sheet_size: true,
            check_values: false,
            check_separator: true,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl FormscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FormscanError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FormscanConfig =
            serde_json::from_str(r#"{"pdf": {"page": 2}, "output": {"pretty": true}}"#).unwrap();

        assert_eq!(config.pdf.page, 2);
        assert_eq!(config.pdf.line_tolerance, 1.0);
        assert!(config.output.pretty);
        assert_eq!(config.compare, CompareConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FormscanConfig::default();
        config.compare.check_values = true;
        config.save(&path).unwrap();

        let loaded = FormscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            FormscanConfig::from_file(&path),
            Err(FormscanError::Config(_))
        ));
    }
}
