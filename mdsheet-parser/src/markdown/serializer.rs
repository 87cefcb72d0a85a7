//! Markdown re-serialization
//!
//! Renders parsed sections back to markdown. This is the inverse of the
//! parser for the block kinds that carry plain text: parsing the output of
//! `serialize_sections` yields an equivalent section sequence, which is
//! what keeps the pipeline honest about not inventing or losing content.
//! Tables are emitted with a separator row after the first row, so a
//! re-parse sees the same data rows.

use super::ast::{Block, Section, SectionLevel, Table};

/// Render a block sequence as markdown, one block per line group.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Paragraph(text) => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            Block::SubHeading(text) => {
                out.push_str("### ");
                out.push_str(text);
                out.push_str("\n\n");
            }
            Block::ListItem(text) => {
                out.push_str("- ");
                out.push_str(text);
                out.push('\n');
            }
            Block::Quote(text) => {
                out.push_str("> ");
                out.push_str(text);
                out.push('\n');
            }
            Block::Table(table) => {
                out.push_str(&serialize_table(table));
            }
        }
    }
    out
}

/// Render full sections, headings included.
pub fn serialize_sections(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        match section.level {
            SectionLevel::Top => out.push_str("# "),
            SectionLevel::Sub => out.push_str("## "),
        }
        out.push_str(&section.title);
        out.push_str("\n\n");
        out.push_str(&serialize_blocks(&section.blocks));
        out.push('\n');
    }
    out
}

fn serialize_table(table: &Table) -> String {
    let mut out = String::new();
    for (idx, row) in table.padded_rows().iter().enumerate() {
        out.push('|');
        for cell in row {
            out.push(' ');
            out.push_str(cell);
            out.push_str(" |");
        }
        out.push('\n');
        if idx == 0 {
            out.push('|');
            for _ in 0..table.column_count() {
                out.push_str("---|");
            }
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_sections;

    fn reparse(sections: &[Section]) -> Vec<Section> {
        parse_sections(&serialize_sections(sections))
    }

    #[test]
    fn test_paragraph_roundtrip() {
        let src = "## S\n\nfirst paragraph\n\nsecond paragraph\n";
        let parsed = parse_sections(src);
        assert_eq!(reparse(&parsed), parsed);
    }

    #[test]
    fn test_list_and_quote_roundtrip() {
        let src = "# T\n\n- one\n- two\n\n> a warning\n";
        let parsed = parse_sections(src);
        assert_eq!(reparse(&parsed), parsed);
    }

    #[test]
    fn test_subheading_roundtrip() {
        let src = "## S\n\n### Inner\n\ntext under inner\n";
        let parsed = parse_sections(src);
        assert_eq!(reparse(&parsed), parsed);
    }

    #[test]
    fn test_table_roundtrip_keeps_data_rows() {
        let src = "## S\n\n| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n";
        let parsed = parse_sections(src);
        let reparsed = reparse(&parsed);
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_ragged_table_serializes_padded() {
        let table = Table::new(vec![
            vec!["A".into(), "B".into(), "C".into()],
            vec!["1".into()],
        ]);
        let out = serialize_table(&table);
        assert!(out.contains("| 1 |  |  |"));
    }
}
