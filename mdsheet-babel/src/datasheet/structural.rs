//! Structural assembly ("full" datasheets)
//!
//! Copies matched README sections verbatim into the canonical section
//! skeleton. The output structure is fixed by the [`SectionPlan`]: every
//! canonical name appears exactly once, in configured order, whether or
//! not the source README has anything to offer for it.

use mdsheet_parser::{Section, SectionLevel};

use super::matcher::find_section;
use super::{Datasheet, DatasheetSection, SectionBody, SectionPlan};

/// Assemble a full datasheet from parsed README sections.
///
/// The title is the first top-level section's title; failing that, the
/// first section title that does not itself look like a heading marker;
/// failing that, the module identifier.
pub fn assemble(sections: &[Section], plan: &SectionPlan, module_id: &str) -> Datasheet {
    let title = pick_title(sections).unwrap_or_else(|| module_id.to_string());

    let assembled = plan
        .sections
        .iter()
        .map(|name| {
            let body = match find_section(sections, name, plan.aliases_for(name).unwrap_or(&[])) {
                Some(blocks) => SectionBody::Blocks(blocks.to_vec()),
                None => SectionBody::Placeholder(plan.placeholder.clone()),
            };
            DatasheetSection {
                heading: name.clone(),
                body,
            }
        })
        .collect();

    Datasheet {
        title,
        tagline: Some(plan.tagline.clone()),
        part_no: None,
        sections: assembled,
    }
}

fn pick_title(sections: &[Section]) -> Option<String> {
    if let Some(section) = sections
        .iter()
        .find(|s| s.level == SectionLevel::Top && !s.title.is_empty())
    {
        return Some(section.title.clone());
    }
    sections
        .iter()
        .find(|s| !s.title.is_empty() && !s.title.starts_with('#'))
        .map(|s| s.title.clone())
}
