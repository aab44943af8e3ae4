//! Extracted document records.
//!
//! The serialized field names and nesting are consumed by downstream diff
//! tooling and must stay stable.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::TypeInfo;
use crate::error::ExtractionError;

/// Field name to field record, in line order.
pub type FieldTable = IndexMap<String, FieldRecord>;

/// A complete extracted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document-level metadata.
    pub meta_data: MetaData,

    /// Extracted fields keyed by key text.
    pub body: FieldTable,
}

impl DocumentRecord {
    /// Parse a document record from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    pub sheet_size: SheetSize,
}

/// Page dimensions rounded to three decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSize {
    #[serde(with = "rust_decimal::serde::float")]
    pub width: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub height: Decimal,
}

/// One extracted `key: value` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Value text, trimmed.
    pub value: String,

    /// Inferred type of the value.
    pub type_value: TypeInfo,

    /// Inferred type of the key.
    pub type_key: TypeInfo,

    /// Font of the key run.
    pub key_font_info: FontDescriptor,

    /// Font of the value run; empty when the line has no value glyphs.
    pub val_font_info: FontDescriptor,

    /// Separator between key and value.
    pub separator: Separator,

    /// Position of the first glyph of the line.
    pub coordinates: Coordinates,
}

/// Font name and size of a glyph run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub font_name: String,

    /// Size rounded to three decimal places; serialized as `""` when absent.
    #[serde(with = "decimal_text")]
    pub font_size: Option<Decimal>,
}

impl FontDescriptor {
    pub fn new(font_name: impl Into<String>, font_size: Decimal) -> Self {
        Self {
            font_name: font_name.into(),
            font_size: Some(font_size),
        }
    }

    /// The descriptor of a run with no glyphs.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.font_name.is_empty() && self.font_size.is_none()
    }
}

impl std::fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.font_size {
            Some(size) => write!(f, "{} {}", self.font_name, size),
            None => write!(f, "{:?}", self.font_name),
        }
    }
}

/// Separator found between key and value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Separator {
    /// The line had no colon; all of it is the key.
    #[default]
    None,
    /// The first colon of the line.
    Colon,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Colon => ":",
        }
    }
}

impl From<Separator> for String {
    fn from(separator: Separator) -> Self {
        separator.as_str().to_string()
    }
}

impl TryFrom<String> for Separator {
    type Error = ExtractionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "" => Ok(Separator::None),
            ":" => Ok(Separator::Colon),
            _ => Err(ExtractionError::InvalidRecord {
                field: "separator".to_string(),
                value,
            }),
        }
    }
}

/// Anchor position of a line, rounded to three decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x0: Decimal,
    pub y0: Decimal,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x0, self.y0)
    }
}

mod decimal_text {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_str(&d.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(None);
        }
        Decimal::from_str(&text).map(Some).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::TextClass;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_record() -> FieldRecord {
        FieldRecord {
            value: "SERVICES LLC".to_string(),
            type_value: TypeInfo::String(Some(TextClass::UpperSpace)),
            type_key: TypeInfo::String(Some(TextClass::Upper)),
            key_font_info: FontDescriptor::new("Arial-BoldMT", Decimal::new(7507, 3)),
            val_font_info: FontDescriptor::new("ArialMT", Decimal::new(7507, 3)),
            separator: Separator::Colon,
            coordinates: Coordinates {
                x0: Decimal::new(13512, 3),
                y0: Decimal::new(222067, 3),
            },
        }
    }

    #[test]
    fn test_document_serialized_shape() {
        let mut body = FieldTable::new();
        body.insert("CARRIER".to_string(), sample_record());
        let document = DocumentRecord {
            meta_data: MetaData {
                sheet_size: SheetSize {
                    width: Decimal::new(612, 0),
                    height: Decimal::new(792, 0),
                },
            },
            body,
        };

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value,
            json!({
                "meta_data": {"sheet_size": {"width": 612.0, "height": 792.0}},
                "body": {
                    "CARRIER": {
                        "value": "SERVICES LLC",
                        "type_value": {"type": "string", "pattern": "^[A-Z ]+$"},
                        "type_key": {"type": "string", "pattern": "^[A-Z]+$"},
                        "key_font_info": {"font_name": "Arial-BoldMT", "font_size": "7.507"},
                        "val_font_info": {"font_name": "ArialMT", "font_size": "7.507"},
                        "separator": ":",
                        "coordinates": {"x0": "13.512", "y0": "222.067"}
                    }
                }
            })
        );

        let parsed = DocumentRecord::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn test_empty_font_descriptor() {
        let value = serde_json::to_value(FontDescriptor::empty()).unwrap();
        assert_eq!(value, json!({"font_name": "", "font_size": ""}));

        let parsed: FontDescriptor =
            serde_json::from_value(json!({"font_name": "", "font_size": ""})).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_separator_rejects_unknown() {
        let result: Result<Separator, _> = serde_json::from_value(json!("-"));
        assert!(result.is_err());
        assert_eq!(serde_json::to_value(Separator::None).unwrap(), json!(""));
    }
}
