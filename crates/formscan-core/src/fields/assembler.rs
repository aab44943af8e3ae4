//! Document assembly from page geometry and a finished field table.

use super::normalizer::round_measure;
use crate::models::document::{DocumentRecord, FieldTable, MetaData, SheetSize};
use crate::pdf::PageSize;

/// Sheet size of a page, rounded like every other measurement.
pub fn sheet_size(page_size: PageSize) -> SheetSize {
    SheetSize {
        width: round_measure(page_size.width),
        height: round_measure(page_size.height),
    }
}

/// Wrap a field table with the page metadata.
pub fn assemble(page_size: PageSize, body: FieldTable) -> DocumentRecord {
    DocumentRecord {
        meta_data: MetaData {
            sheet_size: sheet_size(page_size),
        },
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_assemble_empty_body() {
        let page = PageSize {
            width: 612.0,
            height: 792.0004,
        };
        let document = assemble(page, FieldTable::new());

        assert_eq!(document.meta_data.sheet_size.width, Decimal::new(612, 0));
        assert_eq!(document.meta_data.sheet_size.height, Decimal::new(792, 0));
        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({"meta_data": {"sheet_size": {"width": 612.0, "height": 792.0}}, "body": {}})
        );
    }

    #[test]
    fn test_sheet_size_rounding() {
        let size = sheet_size(PageSize {
            width: 595.27559,
            height: 841.88976,
        });
        assert_eq!(size.width, Decimal::new(595276, 3));
        assert_eq!(size.height, Decimal::new(841890, 3));
    }
}
