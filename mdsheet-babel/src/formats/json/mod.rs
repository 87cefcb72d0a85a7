//! JSON serialization
//!
//! Dumps the assembled datasheet model as pretty-printed JSON. This is the
//! machine-readable counterpart to the `tag` format: scripts diff it, and
//! it is the quickest way to see exactly what the matcher picked for each
//! canonical slot.

use crate::datasheet::Datasheet;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for JSON output
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON dump of the assembled datasheet"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn serialize(&self, sheet: &Datasheet) -> Result<Vec<u8>, FormatError> {
        serde_json::to_vec_pretty(sheet).map_err(|e| FormatError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasheet::{DatasheetSection, SectionBody};
    use mdsheet_parser::Block;

    #[test]
    fn test_json_structure() {
        let sheet = Datasheet {
            title: "STR-3221-R1".to_string(),
            tagline: None,
            part_no: Some("TBD".to_string()),
            sections: vec![DatasheetSection {
                heading: "Product Description".to_string(),
                body: SectionBody::Blocks(vec![Block::Paragraph("A stair LED controller.".into())]),
            }],
        };

        let bytes = JsonFormat.serialize(&sheet).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["title"], "STR-3221-R1");
        assert_eq!(value["part_no"], "TBD");
        assert_eq!(value["sections"][0]["heading"], "Product Description");
    }
}
