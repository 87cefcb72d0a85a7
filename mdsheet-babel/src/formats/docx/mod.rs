//! DOCX serialization
//!
//! Renders a [`Datasheet`] into a Word document via `docx-rs`. The
//! structural mapping is fixed:
//!
//! - full datasheets: title paragraph (Title style) + tagline, then one
//!   Heading1 per canonical section
//! - summary datasheets (`part_no` set): centered bold "Datasheet" line,
//!   product name, part number, then the Heading1 run
//! - sub-headings → Heading2, quotes → indented paragraphs, list items →
//!   bulleted paragraphs, tables → bordered grids with ragged rows padded
//!   and cell text clamped at 600 characters

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, SpecialIndentType, Start, Style, StyleType, Table,
    TableCell, TableRow,
};

use mdsheet_parser::Block;

use crate::datasheet::{Datasheet, SectionBody};
use crate::error::FormatError;
use crate::format::Format;

/// Numbering definition used for all bullet lists.
const BULLET_NUMBERING: usize = 1;

/// Hard cap on table cell text; README tables occasionally smuggle in
/// whole paragraphs.
const CELL_CHAR_LIMIT: usize = 600;

/// Serialize a datasheet into DOCX bytes.
pub fn serialize_datasheet(sheet: &Datasheet) -> Result<Vec<u8>, FormatError> {
    let mut docx = base_document();

    if let Some(part_no) = &sheet.part_no {
        docx = docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text("Datasheet").bold()),
        );
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(sheet.title.as_str())));
        docx = docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(format!("Part No. {}", part_no))),
        );
    } else {
        docx = docx.add_paragraph(
            Paragraph::new()
                .style("Title")
                .add_run(Run::new().add_text(sheet.title.as_str())),
        );
        if let Some(tagline) = &sheet.tagline {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(tagline.as_str())));
        }
    }

    for section in &sheet.sections {
        docx = docx.add_paragraph(
            Paragraph::new()
                .style("Heading1")
                .add_run(Run::new().add_text(section.heading.as_str())),
        );
        docx = match &section.body {
            SectionBody::Placeholder(text) => {
                docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())))
            }
            SectionBody::Blocks(blocks) => append_blocks(docx, blocks),
        };
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| FormatError::Serialization(format!("docx pack failed: {}", e)))?;
    Ok(cursor.into_inner())
}

fn base_document() -> Docx {
    Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(40)
                .bold(),
        )
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(26)
                .bold(),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(360), Some(SpecialIndentType::Hanging(320)), None, None),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

fn append_blocks(mut docx: Docx, blocks: &[Block]) -> Docx {
    for block in blocks {
        docx = match block {
            Block::SubHeading(text) => docx.add_paragraph(
                Paragraph::new()
                    .style("Heading2")
                    .add_run(Run::new().add_text(text.as_str())),
            ),
            Block::Paragraph(text) => {
                docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())))
            }
            Block::Quote(text) => docx.add_paragraph(
                Paragraph::new()
                    .indent(Some(360), None, None, None)
                    .add_run(Run::new().add_text(text.as_str())),
            ),
            Block::ListItem(text) => docx.add_paragraph(
                Paragraph::new()
                    .numbering(
                        NumberingId::new(BULLET_NUMBERING),
                        IndentLevel::new(0),
                    )
                    .add_run(Run::new().add_text(text.as_str())),
            ),
            Block::Table(table) => {
                if table.is_empty() {
                    continue;
                }
                let rows = table
                    .padded_rows()
                    .into_iter()
                    .map(|row| {
                        TableRow::new(
                            row.into_iter()
                                .map(|cell| {
                                    let clamped: String =
                                        cell.chars().take(CELL_CHAR_LIMIT).collect();
                                    TableCell::new().add_paragraph(
                                        Paragraph::new().add_run(Run::new().add_text(clamped)),
                                    )
                                })
                                .collect(),
                        )
                    })
                    .collect();
                // Spacer keeps consecutive tables from merging in Word.
                docx.add_table(Table::new(rows))
                    .add_paragraph(Paragraph::new())
            }
        };
    }
    docx
}

/// Format implementation for DOCX output
pub struct DocxFormat;

impl Format for DocxFormat {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Word document (Office Open XML)"
    }

    fn file_extension(&self) -> &str {
        "docx"
    }

    fn serialize(&self, sheet: &Datasheet) -> Result<Vec<u8>, FormatError> {
        serialize_datasheet(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasheet::{DatasheetSection, SectionBody};
    use mdsheet_parser::Table as MdTable;

    fn sheet_with(body: SectionBody) -> Datasheet {
        Datasheet {
            title: "ALM-173-R1 Alarm Module".to_string(),
            tagline: Some("DIN rail • 24 V DC".to_string()),
            part_no: None,
            sections: vec![DatasheetSection {
                heading: "Overview".to_string(),
                body,
            }],
        }
    }

    fn assert_is_zip(bytes: &[u8]) {
        // DOCX is a zip container; PK\x03\x04 is the local file header magic.
        assert!(bytes.len() > 4);
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_serialize_full_sheet_is_valid_container() {
        let bytes = serialize_datasheet(&sheet_with(SectionBody::Blocks(vec![
            Block::Paragraph("A module.".into()),
            Block::SubHeading("Details".into()),
            Block::ListItem("one".into()),
            Block::Quote("careful".into()),
        ])))
        .unwrap();
        assert_is_zip(&bytes);
    }

    #[test]
    fn test_serialize_summary_sheet_is_valid_container() {
        let mut sheet = sheet_with(SectionBody::Placeholder("See module README.".into()));
        sheet.part_no = Some("TBD".to_string());
        sheet.tagline = None;
        let bytes = serialize_datasheet(&sheet).unwrap();
        assert_is_zip(&bytes);
    }

    #[test]
    fn test_serialize_ragged_table() {
        let table = MdTable::new(vec![
            vec!["A".into(), "B".into(), "C".into()],
            vec!["1".into()],
        ]);
        let bytes =
            serialize_datasheet(&sheet_with(SectionBody::Blocks(vec![Block::Table(table)])))
                .unwrap();
        assert_is_zip(&bytes);
    }

    #[test]
    fn test_empty_table_is_skipped() {
        let bytes = serialize_datasheet(&sheet_with(SectionBody::Blocks(vec![Block::Table(
            MdTable::default(),
        )])))
        .unwrap();
        assert_is_zip(&bytes);
    }

    #[test]
    fn test_format_trait() {
        let format = DocxFormat;
        assert_eq!(format.name(), "docx");
        assert_eq!(format.file_extension(), "docx");
    }
}
