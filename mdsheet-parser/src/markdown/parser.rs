//! Top-to-bottom section walk
//!
//! One pass over the lines of the (preamble-stripped, LF-normalized)
//! source. Heading detection happens on the raw line, so an indented
//! `  # not a heading` stays body text; block classification happens on
//! the trimmed line.

use super::ast::{Block, Section, SectionLevel};
use super::inline::strip_inline;
use super::preamble::strip_preamble;
use super::tables::parse_table;

use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());
static ORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Parse a markdown document into its ordered section sequence.
///
/// Lines before the first `# `/`## ` heading produce no content.
pub fn parse_sections(source: &str) -> Vec<Section> {
    let stripped = strip_preamble(source);
    let normalized = stripped.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut sections = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if let Some(rest) = line.strip_prefix("# ") {
            let title = strip_inline(rest.trim());
            let (blocks, next) = parse_body(&lines, i + 1);
            sections.push(Section::new(SectionLevel::Top, title, blocks));
            i = next;
        } else if let Some(rest) = line.strip_prefix("## ") {
            let title = strip_inline(rest.trim());
            let (blocks, next) = parse_body(&lines, i + 1);
            sections.push(Section::new(SectionLevel::Sub, title, blocks));
            i = next;
        } else {
            i += 1;
        }
    }
    sections
}

/// Classify body lines until the next `# `/`## ` heading.
///
/// Lines whose text normalizes to nothing are dropped; empty blocks are
/// never produced.
fn parse_body(lines: &[&str], start: usize) -> (Vec<Block>, usize) {
    let mut blocks = Vec::new();
    let mut i = start;
    while i < lines.len() {
        let raw = lines[i];
        if raw.starts_with("# ") || raw.starts_with("## ") {
            break;
        }
        let s = raw.trim();
        if s.is_empty() {
            i += 1;
            continue;
        }
        if let Some(rest) = s.strip_prefix("### ") {
            push_text(&mut blocks, Block::SubHeading, rest);
            i += 1;
            continue;
        }
        if let Some(rest) = s.strip_prefix("#### ") {
            push_text(&mut blocks, Block::SubHeading, rest);
            i += 1;
            continue;
        }
        if s.starts_with('|') {
            let (table, next) = parse_table(lines, i);
            if !table.is_empty() {
                blocks.push(Block::Table(table));
            }
            i = next;
            continue;
        }
        if let Some(rest) = s.strip_prefix('>') {
            push_text(&mut blocks, Block::Quote, rest.trim_start_matches('>').trim());
            i += 1;
            continue;
        }
        if let Some(rest) = s.strip_prefix("- ").or_else(|| s.strip_prefix("* ")) {
            push_text(&mut blocks, Block::ListItem, rest);
            i += 1;
            continue;
        }
        if ORDERED_ITEM.is_match(s) {
            push_text(&mut blocks, Block::ListItem, &ORDERED_MARKER.replace(s, ""));
            i += 1;
            continue;
        }
        push_text(&mut blocks, Block::Paragraph, s);
        i += 1;
    }
    (blocks, i)
}

fn push_text(blocks: &mut Vec<Block>, make: fn(String) -> Block, text: &str) {
    let normalized = strip_inline(text);
    if !normalized.is_empty() {
        blocks.push(make(normalized));
    }
}
