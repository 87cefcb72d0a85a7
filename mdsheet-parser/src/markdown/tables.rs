//! Pipe-table parsing
//!
//! Tables are runs of consecutive `|`-prefixed lines. Separator rows (cells
//! of only dashes, colons and pipes) are skipped; every other row is split
//! on `|` with the two outer empty cells dropped. A blank line or any
//! non-`|` line ends the run. No preceding blank line is required.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::Table;
use super::inline::strip_inline;

static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|[\s\-:|]+\|$").unwrap());

/// Whether a trimmed line is a header/body separator row like `|---|:--:|`.
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW.is_match(line.trim())
}

/// Split one table line into cells, dropping the outer empty cells that the
/// leading and trailing `|` produce. Returns `None` when nothing remains
/// (a bare `|` line).
pub fn parse_row(line: &str) -> Option<Vec<String>> {
    let cells: Vec<&str> = line.trim().split('|').collect();
    if cells.len() <= 2 {
        return None;
    }
    Some(cells[1..cells.len() - 1].iter().map(|c| strip_inline(c)).collect())
}

/// Consume a run of table lines starting at `start`. Returns the parsed
/// table (possibly empty) and the index of the first unconsumed line.
pub fn parse_table(lines: &[&str], start: usize) -> (Table, usize) {
    let mut rows = Vec::new();
    let mut i = start;
    while i < lines.len() {
        let s = lines[i].trim();
        if s.is_empty() || !s.starts_with('|') {
            break;
        }
        if is_separator_row(s) {
            i += 1;
            continue;
        }
        if let Some(cells) = parse_row(s) {
            rows.push(cells);
        }
        i += 1;
    }
    (Table::new(rows), i)
}
