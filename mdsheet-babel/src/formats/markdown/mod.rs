//! Markdown serialization
//!
//! Renders the assembled datasheet back to markdown, reusing the parser
//! crate's block serializer so the output re-parses to the same content.
//! Useful for eyeballing an assembly without opening Word, and as the
//! text surface the round-trip tests run against.

use mdsheet_parser::markdown::serialize_blocks;

use crate::datasheet::{Datasheet, SectionBody};
use crate::error::FormatError;
use crate::format::Format;

/// Serialize a datasheet to markdown text.
pub fn serialize_datasheet(sheet: &Datasheet) -> String {
    let mut out = String::new();

    out.push_str("# ");
    out.push_str(&sheet.title);
    out.push_str("\n\n");
    if let Some(part_no) = &sheet.part_no {
        out.push_str(&format!("Part No. {}\n\n", part_no));
    }
    if let Some(tagline) = &sheet.tagline {
        out.push_str(tagline);
        out.push_str("\n\n");
    }

    for section in &sheet.sections {
        out.push_str("## ");
        out.push_str(&section.heading);
        out.push_str("\n\n");
        match &section.body {
            SectionBody::Placeholder(text) => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            SectionBody::Blocks(blocks) => {
                out.push_str(&serialize_blocks(blocks));
                out.push('\n');
            }
        }
    }

    out
}

/// Format implementation for markdown output
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Plain markdown rendering of the assembled datasheet"
    }

    fn file_extension(&self) -> &str {
        "md"
    }

    fn serialize(&self, sheet: &Datasheet) -> Result<Vec<u8>, FormatError> {
        Ok(serialize_datasheet(sheet).into_bytes())
    }
}
