//! Layout regression diffing between two extracted documents.
//!
//! A reference document extracted from a known-good form is compared with a
//! candidate extracted from a newer rendering of the same form. Values are
//! expected to change between documents; layout attributes are not.

use std::fmt;

use serde::Serialize;

use crate::models::config::CompareConfig;
use crate::models::document::{DocumentRecord, FieldRecord, SheetSize};

/// Attribute of a field that differs between documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldAspect {
    Coordinates,
    TypeKey,
    TypeValue,
    KeyFontInfo,
    ValFontInfo,
    Separator,
    Value,
}

impl FieldAspect {
    /// Serialized field name of the aspect.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldAspect::Coordinates => "coordinates",
            FieldAspect::TypeKey => "type_key",
            FieldAspect::TypeValue => "type_value",
            FieldAspect::KeyFontInfo => "key_font_info",
            FieldAspect::ValFontInfo => "val_font_info",
            FieldAspect::Separator => "separator",
            FieldAspect::Value => "value",
        }
    }
}

impl fmt::Display for FieldAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One differing attribute of a shared key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMismatch {
    pub key: String,
    pub aspect: FieldAspect,
    pub reference: String,
    pub candidate: String,
}

/// Differing page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SheetSizeMismatch {
    pub reference: SheetSize,
    pub candidate: SheetSize,
}

/// Differences between a reference and a candidate document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentDiff {
    /// Set when sheet sizes are compared and differ.
    pub sheet_size: Option<SheetSizeMismatch>,
    /// Keys only in the reference, in reference order.
    pub missing: Vec<String>,
    /// Keys only in the candidate, in candidate order.
    pub unexpected: Vec<String>,
    /// Attribute differences of shared keys, in reference order.
    pub mismatches: Vec<FieldMismatch>,
}

impl DocumentDiff {
    /// True when nothing differs.
    pub fn is_clean(&self) -> bool {
        self.sheet_size.is_none()
            && self.missing.is_empty()
            && self.unexpected.is_empty()
            && self.mismatches.is_empty()
    }

    /// Total number of reported differences.
    pub fn difference_count(&self) -> usize {
        usize::from(self.sheet_size.is_some())
            + self.missing.len()
            + self.unexpected.len()
            + self.mismatches.len()
    }
}

impl fmt::Display for DocumentDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "documents match");
        }

        if let Some(sheet) = &self.sheet_size {
            writeln!(
                f,
                "sheet size: {}x{} != {}x{}",
                sheet.reference.width, sheet.reference.height, sheet.candidate.width, sheet.candidate.height
            )?;
        }
        for key in &self.missing {
            writeln!(f, "missing key: {:?}", key)?;
        }
        for key in &self.unexpected {
            writeln!(f, "unexpected key: {:?}", key)?;
        }
        for mismatch in &self.mismatches {
            writeln!(
                f,
                "{:?} {}: {} != {}",
                mismatch.key, mismatch.aspect, mismatch.reference, mismatch.candidate
            )?;
        }
        writeln!(f, "{} difference(s)", self.difference_count())
    }
}

/// Compare a candidate document against a reference.
pub fn compare_documents(
    reference: &DocumentRecord,
    candidate: &DocumentRecord,
    options: &CompareConfig,
) -> DocumentDiff {
    let mut diff = DocumentDiff::default();

    let (ref_sheet, cand_sheet) = (reference.meta_data.sheet_size, candidate.meta_data.sheet_size);
    if options.check_sheet_size && ref_sheet != cand_sheet {
        diff.sheet_size = Some(SheetSizeMismatch {
            reference: ref_sheet,
            candidate: cand_sheet,
        });
    }

    for (key, expected) in &reference.body {
        match candidate.body.get(key) {
            Some(actual) => compare_fields(key, expected, actual, options, &mut diff.mismatches),
            None => diff.missing.push(key.clone()),
        }
    }

    diff.unexpected = candidate
        .body
        .keys()
        .filter(|key| !reference.body.contains_key(*key))
        .cloned()
        .collect();

    diff
}

fn compare_fields(
    key: &str,
    expected: &FieldRecord,
    actual: &FieldRecord,
    options: &CompareConfig,
    mismatches: &mut Vec<FieldMismatch>,
) {
    let mut check = |aspect: FieldAspect, same: bool, reference: String, candidate: String| {
        if !same {
            mismatches.push(FieldMismatch {
                key: key.to_string(),
                aspect,
                reference,
                candidate,
            });
        }
    };

    check(
        FieldAspect::Coordinates,
        expected.coordinates == actual.coordinates,
        expected.coordinates.to_string(),
        actual.coordinates.to_string(),
    );
    check(
        FieldAspect::TypeKey,
        expected.type_key == actual.type_key,
        expected.type_key.to_string(),
        actual.type_key.to_string(),
    );
    check(
        FieldAspect::TypeValue,
        expected.type_value == actual.type_value,
        expected.type_value.to_string(),
        actual.type_value.to_string(),
    );
    check(
        FieldAspect::KeyFontInfo,
        expected.key_font_info == actual.key_font_info,
        expected.key_font_info.to_string(),
        actual.key_font_info.to_string(),
    );
    check(
        FieldAspect::ValFontInfo,
        expected.val_font_info == actual.val_font_info,
        expected.val_font_info.to_string(),
        actual.val_font_info.to_string(),
    );
    if options.check_separator {
        check(
            FieldAspect::Separator,
            expected.separator == actual.separator,
            format!("{:?}", expected.separator.as_str()),
            format!("{:?}", actual.separator.as_str()),
        );
    }
    if options.check_values {
        check(
            FieldAspect::Value,
            expected.value == actual.value,
            format!("{:?}", expected.value),
            format!("{:?}", actual.value),
        );
    }
}
