//! Semantic type descriptors and the fixed pattern catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Pattern reported for digit-only text.
pub const NUMBER_PATTERN: &str = r"^\d+$";

/// Literal date shapes accepted as dates, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `DD.MM.YYYY`
    DayMonthYear,
    /// `MM.DD.YYYY`
    MonthDayYear,
    /// `YYYY.MM.DD`
    YearMonthDay,
    /// `YYYY.DD.MM`
    YearDayMonth,
}

impl DateFormat {
    pub const ALL: [DateFormat; 4] = [
        DateFormat::DayMonthYear,
        DateFormat::MonthDayYear,
        DateFormat::YearMonthDay,
        DateFormat::YearDayMonth,
    ];

    /// strftime-style format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d.%m.%Y",
            DateFormat::MonthDayYear => "%m.%d.%Y",
            DateFormat::YearMonthDay => "%Y.%m.%d",
            DateFormat::YearDayMonth => "%Y.%d.%m",
        }
    }

    pub fn from_pattern(pattern: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == pattern)
    }
}

/// Character-class shapes for free text, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextClass {
    /// Uppercase letters only.
    Upper,
    /// Uppercase letters and spaces.
    UpperSpace,
    /// Uppercase letters and `#`.
    UpperHash,
    /// Lowercase letters only.
    Lower,
    /// Uppercase letters and digits.
    UpperDigits,
    /// Lowercase letters and digits.
    LowerDigits,
    /// Letters of either case and digits.
    Alphanumeric,
}

impl TextClass {
    pub const ALL: [TextClass; 7] = [
        TextClass::Upper,
        TextClass::UpperSpace,
        TextClass::UpperHash,
        TextClass::Lower,
        TextClass::UpperDigits,
        TextClass::LowerDigits,
        TextClass::Alphanumeric,
    ];

    /// Regex source of the class.
    pub fn pattern(&self) -> &'static str {
        match self {
            TextClass::Upper => r"^[A-Z]+$",
            TextClass::UpperSpace => r"^[A-Z ]+$",
            TextClass::UpperHash => r"^[A-Z#]+$",
            TextClass::Lower => r"^[a-z]+$",
            TextClass::UpperDigits => r"^[A-Z0-9]+$",
            TextClass::LowerDigits => r"^[a-z0-9]+$",
            TextClass::Alphanumeric => r"^[a-zA-Z0-9]+$",
        }
    }

    pub fn from_pattern(pattern: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.pattern() == pattern)
    }
}

/// Inferred semantic type of a key or value.
///
/// Serialized as `{"type": ..., "pattern": ...}`; an empty pattern means
/// unclassified free-form text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RawTypeInfo", try_from = "RawTypeInfo")]
pub enum TypeInfo {
    /// Digits only.
    Number,
    /// One of the whitelisted literal date shapes.
    Date(DateFormat),
    /// Text, with the matched character class if any.
    String(Option<TextClass>),
}

impl TypeInfo {
    /// The generic bucket for text matching no catalog entry.
    pub const UNCLASSIFIED: TypeInfo = TypeInfo::String(None);

    pub fn type_name(&self) -> &'static str {
        match self {
            TypeInfo::Number => "number",
            TypeInfo::Date(_) => "date",
            TypeInfo::String(_) => "string",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            TypeInfo::Number => NUMBER_PATTERN,
            TypeInfo::Date(format) => format.as_str(),
            TypeInfo::String(Some(class)) => class.pattern(),
            TypeInfo::String(None) => "",
        }
    }
}

impl Default for TypeInfo {
    fn default() -> Self {
        Self::UNCLASSIFIED
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.type_name(), self.pattern())
    }
}

#[derive(Serialize, Deserialize)]
struct RawTypeInfo {
    #[serde(rename = "type")]
    kind: String,
    pattern: String,
}

impl From<TypeInfo> for RawTypeInfo {
    fn from(info: TypeInfo) -> Self {
        Self {
            kind: info.type_name().to_string(),
            pattern: info.pattern().to_string(),
        }
    }
}

impl TryFrom<RawTypeInfo> for TypeInfo {
    type Error = ExtractionError;

    fn try_from(raw: RawTypeInfo) -> Result<Self, Self::Error> {
        let invalid = || ExtractionError::InvalidRecord {
            field: format!("{} pattern", raw.kind),
            value: raw.pattern.clone(),
        };

        match raw.kind.as_str() {
            "number" if raw.pattern == NUMBER_PATTERN => Ok(TypeInfo::Number),
            "date" => DateFormat::from_pattern(&raw.pattern)
                .map(TypeInfo::Date)
                .ok_or_else(invalid),
            "string" if raw.pattern.is_empty() => Ok(TypeInfo::UNCLASSIFIED),
            "string" => TextClass::from_pattern(&raw.pattern)
                .map(|c| TypeInfo::String(Some(c)))
                .ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_type_info_serialized_shape() {
        let value = serde_json::to_value(TypeInfo::Date(DateFormat::DayMonthYear)).unwrap();
        assert_eq!(value, json!({"type": "date", "pattern": "%d.%m.%Y"}));

        let value = serde_json::to_value(TypeInfo::UNCLASSIFIED).unwrap();
        assert_eq!(value, json!({"type": "string", "pattern": ""}));

        let value = serde_json::to_value(TypeInfo::Number).unwrap();
        assert_eq!(value, json!({"type": "number", "pattern": "^\\d+$"}));
    }

    #[test]
    fn test_type_info_rejects_unknown_patterns() {
        let result: Result<TypeInfo, _> =
            serde_json::from_value(json!({"type": "string", "pattern": "^[0-9]+$"}));
        assert!(result.is_err());

        let result: Result<TypeInfo, _> =
            serde_json::from_value(json!({"type": "number", "pattern": ""}));
        assert!(result.is_err());

        let result: Result<TypeInfo, _> =
            serde_json::from_value(json!({"type": "", "pattern": ""}));
        assert!(result.is_err());
    }

    #[test]
    fn test_type_info_parses_catalog_entries() {
        let parsed: TypeInfo =
            serde_json::from_value(json!({"type": "string", "pattern": "^[A-Z ]+$"})).unwrap();
        assert_eq!(parsed, TypeInfo::String(Some(TextClass::UpperSpace)));

        let parsed: TypeInfo =
            serde_json::from_value(json!({"type": "date", "pattern": "%Y.%d.%m"})).unwrap();
        assert_eq!(parsed, TypeInfo::Date(DateFormat::YearDayMonth));
    }

    #[test]
    fn test_catalog_patterns_are_distinct() {
        for (i, a) in TextClass::ALL.iter().enumerate() {
            for b in &TextClass::ALL[i + 1..] {
                assert_ne!(a.pattern(), b.pattern());
            }
        }
        assert_eq!(DateFormat::from_pattern("%m.%d.%Y"), Some(DateFormat::MonthDayYear));
        assert_eq!(DateFormat::from_pattern("%d/%m/%Y"), None);
    }
}
