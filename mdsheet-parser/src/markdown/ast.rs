//! Section and block model
//!
//! A parsed README is a flat, ordered sequence of [`Section`] records.
//! Sections are immutable once built; the parser produces them in document
//! order and downstream code only ever reads them.

use serde::Serialize;

/// Heading depth of a section.
///
/// Only the two outer heading levels open sections; `###` and deeper are
/// body content ([`Block::SubHeading`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionLevel {
    /// A `# ` heading.
    Top,
    /// A `## ` heading.
    Sub,
}

/// A pipe table, kept as raw rows of cell text.
///
/// Rows may be ragged; renderers pad to [`Table::column_count`] rather than
/// truncate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Table { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row width. Zero for an empty table.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rows padded with empty cells to a uniform [`Table::column_count`].
    pub fn padded_rows(&self) -> Vec<Vec<String>> {
        let cols = self.column_count();
        self.rows
            .iter()
            .map(|row| {
                let mut padded = row.clone();
                padded.resize(cols, String::new());
                padded
            })
            .collect()
    }
}

/// One classified body line (or table run) of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// Plain running text.
    Paragraph(String),
    /// A `###`/`####` heading inside a section body.
    SubHeading(String),
    /// A single `- `/`* `/`1. ` item with the marker stripped.
    ListItem(String),
    /// A `>` line with the markers stripped.
    Quote(String),
    /// A run of consecutive pipe-table rows.
    Table(Table),
}

impl Block {
    /// The text payload, if this block carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Paragraph(t) | Block::SubHeading(t) | Block::ListItem(t) | Block::Quote(t) => {
                Some(t)
            }
            Block::Table(_) => None,
        }
    }
}

/// A heading plus its classified body, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub level: SectionLevel,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(level: SectionLevel, title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Section {
            level,
            title: title.into(),
            blocks,
        }
    }
}
