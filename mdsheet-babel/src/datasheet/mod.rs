//! Datasheet document model and assembly
//!
//! A [`Datasheet`] is the assembled output document: a title block followed
//! by a fixed, ordered run of named sections. It is produced by one of two
//! strategies and consumed by the output formats:
//!
//! - [`structural`] copies matched README sections verbatim into the
//!   canonical section skeleton ("full" datasheets).
//! - [`selective`] pulls individual fields out of the whole document by
//!   targeted pattern search ("summary" datasheets). It never invents a
//!   value: a field with no textual evidence is simply absent.
//!
//! Section matching is heading-alias based, see [`matcher`]. The canonical
//! section order and alias table arrive as a [`SectionPlan`] built from
//! configuration; the model itself carries no global state.

pub mod matcher;
pub mod selective;
pub mod structural;

use serde::Serialize;

pub use mdsheet_parser::{Block, Section, Table};

/// The fixed output structure for structural datasheets: canonical section
/// names in output order, the alias table used to match them, and the
/// texts the assembler falls back to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionPlan {
    /// Canonical section names, in output order.
    pub sections: Vec<String>,
    /// Lowercased canonical name → normalized alias strings.
    pub aliases: Vec<(String, Vec<String>)>,
    /// Body emitted for a canonical section with no match.
    pub placeholder: String,
    /// Fixed tagline paragraph under the title.
    pub tagline: String,
}

impl SectionPlan {
    /// Alias strings for a canonical name, if configured.
    pub fn aliases_for(&self, canonical: &str) -> Option<&[String]> {
        let key = canonical.to_lowercase();
        self.aliases
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, aliases)| aliases.as_slice())
    }
}

/// Body of one assembled section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SectionBody {
    /// Content copied or extracted from the source document.
    Blocks(Vec<Block>),
    /// The fixed fallback sentence for a section with no match.
    Placeholder(String),
}

/// One named section of the assembled datasheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasheetSection {
    pub heading: String,
    pub body: SectionBody,
}

/// The assembled output document.
///
/// `part_no` is set by the selective strategy only; formats use it to pick
/// the summary title block over the full-datasheet one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Datasheet {
    pub title: String,
    pub tagline: Option<String>,
    pub part_no: Option<String>,
    pub sections: Vec<DatasheetSection>,
}

impl Datasheet {
    /// Headings of all sections, in order.
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_for_is_case_insensitive_on_canonical() {
        let plan = SectionPlan {
            sections: vec!["Tech Specs".to_string()],
            aliases: vec![("tech specs".to_string(), vec!["i/o summary".to_string()])],
            placeholder: "n/a".to_string(),
            tagline: String::new(),
        };
        assert_eq!(
            plan.aliases_for("Tech Specs"),
            Some(&["i/o summary".to_string()][..])
        );
        assert_eq!(plan.aliases_for("Links"), None);
    }
}
