//! Heading-alias section matching
//!
//! READMEs name their sections freely ("2.3 I/O Summary", "⚙️ Technical
//! Specifications", "Use Cases"); the datasheet needs them under canonical
//! names. Matching is deliberately simple and order-dependent, and its
//! semantics are a fixed contract:
//!
//! - candidate headings are normalized (lowercase, ordinal prefix and
//!   leading `#` runs stripped, whitespace collapsed)
//! - the target's alias strings are tried with bidirectional substring
//!   containment, then the lowercased canonical name as a plain substring
//! - the first parsed section to hit wins; there is no scoring
//!
//! Alias sets of different canonical names may overlap (e.g. "i/o summary"
//! feeds both "Tech Specs" and "Inputs & Outputs"), so which README
//! section lands in which slot can depend on document order. That
//! ambiguity is inherited behavior and must not be "fixed" here: changing
//! it would silently repopulate existing datasheets.

use once_cell::sync::Lazy;
use regex::Regex;

use mdsheet_parser::{Block, Section};

static ORDINAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+(?:\.\d+)+|\d+[.)])\s*").unwrap());
static HASH_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s*").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a heading for matching: lowercase, strip a leading ordinal
/// like `2.3 ` or `1) `, strip leading `#` runs, collapse whitespace.
pub fn normalize_heading(title: &str) -> String {
    let t = title.to_lowercase();
    let t = t.trim();
    let t = ORDINAL_PREFIX.replace(t, "");
    let t = HASH_PREFIX.replace(&t, "");
    WHITESPACE_RUN.replace_all(&t, " ").trim().to_string()
}

/// Find the blocks of the first section matching the canonical `target`.
///
/// `aliases` is the configured alias set; when empty, the lowercased
/// canonical name is the only alias. Returns `None` when nothing matches.
pub fn find_section<'a>(
    sections: &'a [Section],
    target: &str,
    aliases: &[String],
) -> Option<&'a [Block]> {
    let target_norm = target.to_lowercase();
    let fallback = [target_norm.clone()];
    let aliases: &[String] = if aliases.is_empty() { &fallback } else { aliases };

    for section in sections {
        let norm = normalize_heading(&section.title);
        for alias in aliases {
            if norm.contains(alias.as_str()) || alias.contains(&norm) {
                return Some(&section.blocks);
            }
        }
        if norm.contains(&target_norm) {
            return Some(&section.blocks);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdsheet_parser::{parse_sections, SectionLevel};
    use rstest::rstest;

    #[rstest]
    #[case("2.3 I/O Summary", "i/o summary")]
    #[case("1. Introduction", "introduction")]
    #[case("1) Introduction", "introduction")]
    #[case("  Power   Supply  ", "power supply")]
    #[case("### Quick Start", "quick start")]
    #[case("Overview", "overview")]
    fn test_normalize_heading(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_heading(input), expected);
    }

    #[test]
    fn test_bare_leading_number_is_not_an_ordinal() {
        // "24 VDC Power" starts with a number but carries no dot/paren
        // marker; it must keep its digits.
        assert_eq!(normalize_heading("24 VDC Power"), "24 vdc power");
        assert_eq!(normalize_heading("2.3.1 Relays"), "relays");
    }

    fn sections(src: &str) -> Vec<mdsheet_parser::Section> {
        parse_sections(src)
    }

    #[test]
    fn test_first_match_wins_in_document_order() {
        let docs = sections("## Relays\n\nfirst\n\n## Relay Outputs\n\nsecond\n");
        let aliases = vec!["relay".to_string()];
        let blocks = find_section(&docs, "Inputs & Outputs", &aliases).unwrap();
        assert_eq!(blocks, &[Block::Paragraph("first".into())]);
    }

    #[test]
    fn test_alias_containment_is_bidirectional() {
        // Normalized heading contained in a longer alias string.
        let docs = sections("## Shielding\n\nbody\n");
        let aliases = vec!["shielding & emc".to_string()];
        assert!(find_section(&docs, "Cable Recommendations", &aliases).is_some());

        // Alias contained in a longer heading.
        let docs = sections("## Cable Shielding Notes\n\nbody\n");
        let aliases = vec!["shielding".to_string()];
        assert!(find_section(&docs, "Cable Recommendations", &aliases).is_some());
    }

    #[test]
    fn test_canonical_name_fallback_without_aliases() {
        let docs = sections("## Board Overview\n\nbody\n");
        assert!(find_section(&docs, "Overview", &[]).is_some());
    }

    #[test]
    fn test_canonical_name_probe_after_alias_misses() {
        let docs = sections("## Documentation Portal\n\nbody\n");
        let aliases = vec!["downloads".to_string()];
        assert!(find_section(&docs, "Documentation", &aliases).is_some());
    }

    #[test]
    fn test_no_match_returns_none() {
        let docs = sections("## Wiring\n\nbody\n");
        let aliases = vec!["links".to_string(), "support".to_string()];
        assert_eq!(find_section(&docs, "Links", &aliases), None);
    }

    #[test]
    fn test_spec_literal_tech_specs_example() {
        let docs = sections("## 2.3 I/O Summary\n| Parameter | Value |\n|---|---|\n| Inputs | 4 |\n");
        assert_eq!(docs[0].level, SectionLevel::Sub);

        let aliases = vec!["tech specs".to_string(), "i/o summary".to_string()];
        let blocks = find_section(&docs, "Tech Specs", &aliases).unwrap();
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Table(table) => {
                assert_eq!(
                    table.rows,
                    vec![
                        vec!["Parameter".to_string(), "Value".to_string()],
                        vec!["Inputs".to_string(), "4".to_string()],
                    ]
                );
            }
            other => panic!("expected table, got {:?}", other),
        }
    }
}
