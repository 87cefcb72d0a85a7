//! XML-like tag serialization
//!
//! Debug rendering of the assembled datasheet as an indented tag tree.
//!
//! ```text
//! <datasheet>
//!   <title>ALM-173-R1 Alarm Module</title>
//!   <section>Overview
//!     <paragraph>Seventeen alarm inputs.</paragraph>
//!   </section>
//! </datasheet>
//! ```

use mdsheet_parser::Block;

use crate::datasheet::{Datasheet, SectionBody};
use crate::error::FormatError;
use crate::format::Format;

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
    }

    fn leaf(&mut self, tag: &str, text: &str) {
        self.push_indent(&format!("<{}>{}</{}>\n", tag, escape_xml(text), tag));
    }

    fn serialize_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(text) => self.leaf("paragraph", text),
            Block::SubHeading(text) => self.leaf("sub-heading", text),
            Block::ListItem(text) => self.leaf("list-item", text),
            Block::Quote(text) => self.leaf("quote", text),
            Block::Table(table) => {
                self.push_indent("<table>\n");
                self.indent_level += 1;
                for row in &table.rows {
                    self.push_indent("<row>");
                    for cell in row {
                        self.output
                            .push_str(&format!("<cell>{}</cell>", escape_xml(cell)));
                    }
                    self.output.push_str("</row>\n");
                }
                self.indent_level -= 1;
                self.push_indent("</table>\n");
            }
        }
    }
}

/// Serialize a datasheet to the tag format
pub fn serialize_datasheet(sheet: &Datasheet) -> String {
    let mut s = TagSerializer::new();
    s.output.push_str("<datasheet>\n");
    s.indent_level = 1;

    s.leaf("title", &sheet.title);
    if let Some(part_no) = &sheet.part_no {
        s.leaf("part-no", part_no);
    }
    if let Some(tagline) = &sheet.tagline {
        s.leaf("tagline", tagline);
    }

    for section in &sheet.sections {
        s.push_indent(&format!("<section>{}\n", escape_xml(&section.heading)));
        s.indent_level += 1;
        match &section.body {
            SectionBody::Placeholder(text) => s.leaf("placeholder", text),
            SectionBody::Blocks(blocks) => {
                for block in blocks {
                    s.serialize_block(block);
                }
            }
        }
        s.indent_level -= 1;
        s.push_indent("</section>\n");
    }

    s.output.push_str("</datasheet>");
    s.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for the tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag format for inspecting assembled datasheets"
    }

    fn file_extension(&self) -> &str {
        "tag"
    }

    fn serialize(&self, sheet: &Datasheet) -> Result<Vec<u8>, FormatError> {
        Ok(serialize_datasheet(sheet).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasheet::DatasheetSection;
    use mdsheet_parser::Table;

    #[test]
    fn test_serialize_sections_and_blocks() {
        let sheet = Datasheet {
            title: "Module".to_string(),
            tagline: None,
            part_no: None,
            sections: vec![DatasheetSection {
                heading: "Overview".to_string(),
                body: SectionBody::Blocks(vec![
                    Block::Paragraph("Hello".into()),
                    Block::Table(Table::new(vec![vec!["A".into(), "B".into()]])),
                ]),
            }],
        };

        let out = serialize_datasheet(&sheet);
        assert!(out.starts_with("<datasheet>\n"));
        assert!(out.contains("<title>Module</title>"));
        assert!(out.contains("<section>Overview"));
        assert!(out.contains("<paragraph>Hello</paragraph>"));
        assert!(out.contains("<row><cell>A</cell><cell>B</cell></row>"));
        assert!(out.ends_with("</datasheet>"));
    }

    #[test]
    fn test_placeholder_rendering() {
        let sheet = Datasheet {
            title: "T".to_string(),
            tagline: None,
            part_no: None,
            sections: vec![DatasheetSection {
                heading: "Links".to_string(),
                body: SectionBody::Placeholder("See module README for details.".into()),
            }],
        };
        let out = serialize_datasheet(&sheet);
        assert!(out.contains("<placeholder>See module README for details.</placeholder>"));
    }

    #[test]
    fn test_xml_escaping() {
        let sheet = Datasheet {
            title: "Inputs & <Outputs>".to_string(),
            tagline: None,
            part_no: None,
            sections: vec![],
        };
        let out = serialize_datasheet(&sheet);
        assert!(out.contains("<title>Inputs &amp; &lt;Outputs&gt;</title>"));
    }
}
