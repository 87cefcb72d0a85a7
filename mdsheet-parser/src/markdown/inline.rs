//! Inline markdown normalization
//!
//! Extracted text never keeps markdown inline syntax: images are deleted
//! outright, links collapse to their text. Bold markers are collapsed only
//! where a caller asks for it (the selective field extractor does; the
//! generic block parser does not).

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Delete image syntax, collapse links to their text, trim.
pub fn strip_inline(text: &str) -> String {
    let no_images = IMAGE.replace_all(text, "");
    let no_links = LINK.replace_all(&no_images, "$1");
    no_links.trim().to_string()
}

/// [`strip_inline`] plus `**bold**` collapse.
pub fn strip_emphasis(text: &str) -> String {
    let stripped = strip_inline(text);
    BOLD.replace_all(&stripped, "$1").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_are_deleted() {
        assert_eq!(strip_inline("before ![alt text](img/a.png) after"), "before  after");
        assert_eq!(strip_inline("![only image](x.png)"), "");
    }

    #[test]
    fn test_links_collapse_to_text() {
        assert_eq!(strip_inline("see [the manual](docs/manual.pdf)"), "see the manual");
        assert_eq!(
            strip_inline("[a](u1) and [b](u2)"),
            "a and b"
        );
    }

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(strip_inline("  plain text  "), "plain text");
    }

    #[test]
    fn test_bold_kept_by_strip_inline() {
        assert_eq!(strip_inline("**RS-485** bus"), "**RS-485** bus");
    }

    #[test]
    fn test_bold_collapsed_by_strip_emphasis() {
        assert_eq!(strip_emphasis("**RS-485** bus"), "RS-485 bus");
        assert_eq!(strip_emphasis("a **b** c **d**"), "a b c d");
    }

    #[test]
    fn test_image_inside_link_text_is_not_a_link() {
        // The image is removed first, leaving a dangling pair that no longer
        // parses as a link.
        assert_eq!(strip_inline("[![badge](b.png)](target)"), "[](target)");
    }
}
