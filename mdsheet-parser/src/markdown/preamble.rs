//! Boilerplate preamble stripping
//!
//! Module READMEs open with one of two known banner blocks: a
//! construction-warning heading (`# 🚧 ...`) or an important-notice quote
//! (`> **Important Notice:** ...`), each terminated by a `---` horizontal
//! rule. Both are presentation noise and are removed before structural
//! parsing. The match is anchored to the document start; banners appearing
//! later in the document are left alone.

use once_cell::sync::Lazy;
use regex::Regex;

static CONSTRUCTION_BANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A# 🚧.*?---\s*").unwrap());
static IMPORTANT_NOTICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A> \*\*Important Notice:\*\*.*?---\s*").unwrap());

/// Remove a leading boilerplate banner, up to and including the first
/// horizontal rule. Applied once per known banner shape.
pub fn strip_preamble(text: &str) -> String {
    let text = CONSTRUCTION_BANNER.replace(text, "");
    IMPORTANT_NOTICE.replace(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_banner_removed() {
        let src = "# 🚧 Under Construction\n\nDo not rely on this yet.\n\n---\n# ALM-173-R1\n\nBody.\n";
        let out = strip_preamble(src);
        assert!(out.starts_with("# ALM-173-R1"));
        assert!(!out.contains("Under Construction"));
    }

    #[test]
    fn test_important_notice_removed() {
        let src = "> **Important Notice:** read the manual first.\n\n---\n# Module\n";
        let out = strip_preamble(src);
        assert!(out.starts_with("# Module"));
    }

    #[test]
    fn test_stops_at_first_rule() {
        let src = "# 🚧 WIP\n---\n# Title\n\ncontent\n\n---\n\nmore\n";
        let out = strip_preamble(src);
        assert!(out.starts_with("# Title"));
        assert!(out.contains("more"));
    }

    #[test]
    fn test_mid_document_banner_untouched() {
        let src = "# Title\n\n# 🚧 not a preamble\n\n---\n";
        assert_eq!(strip_preamble(src), src);
    }

    #[test]
    fn test_document_without_preamble_unchanged() {
        let src = "# Title\n\nA paragraph.\n";
        assert_eq!(strip_preamble(src), src);
    }
}
