//! Selective extraction ("summary" datasheets)
//!
//! Instead of copying whole sections, this strategy pulls individual
//! fields out of the entire document with targeted pattern probes:
//! product code and name, a short product description, technical-spec
//! rows, installation/environmental/mechanical rows, and compliance
//! statements.
//!
//! The one hard rule: a probe that finds nothing produces nothing. No
//! spec row, no installation row, no compliance paragraph is ever emitted
//! with an empty or guessed value. Whole sections with no findings fall
//! back to a "see the README" sentence; rows never do.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use mdsheet_parser::markdown::inline::strip_emphasis;
use mdsheet_parser::markdown::tables::parse_table;
use mdsheet_parser::{Block, Table};

use super::{Datasheet, DatasheetSection, SectionBody};

const SAFETY_NOTICE: &str = "Safety notice: This module is intended for SELV/PELV applications. \
Install and wire according to local regulations. Do not connect mains to logic/input terminals \
unless so specified.";

static MODULE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([A-Z]{2,4}-\d+-R\d+|MicroPLC|MiniPLC)").unwrap());
static INTRO_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#+\s*(?:1\.\s*)?(?:Overview & Description|Module Description|Overview|Introduction)")
        .unwrap()
});
static SUPPLY_24V: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)24\s*V\s*DC|24\s*VDC").unwrap());
static MCU: Lazy<Regex> = Lazy::new(|| Regex::new(r"(RP2350A|RP2350|ESP32)[^\n]*").unwrap());

static TERMINALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)terminal[^\n]*(5\.08|pitch|wire|torque|Nm|mm²|AWG)[^\n]*").unwrap()
});
static OPERATING_TEMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(operating\s*temp|0\s*°?C\s*to\s*\+?40\s*°?C|0\.\.\.?\+?40)").unwrap()
});
static INGRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)IP20|IP\s*20|ingress\s*protection").unwrap());
static HUMIDITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+\s*%?\s*RH|humidity[^\n]{0,30})").unwrap());
static DIMENSIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+\.?\d*\s*×\s*\d+\.?\d*\s*×\s*\d+\.?\d*\s*mm|\d+\.?\d*\s*×\s*\d+\.?\d*\s*mm)")
        .unwrap()
});
static DIN_MOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(35\s*mm\s*DIN|DIN\s*rail|EN\s*50022)").unwrap());
static WEIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+\s*g|\d+\s*kg|weight[^\n]{0,20})").unwrap());

static COMPLIANCE_GATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)CE\b|RoHS|REACH|UL\d|CSA|directive|certification|compliant").unwrap()
});
static COMPLIANCE_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\bCE\b|RoHS|REACH|UL[\d-]+|CSA[^\n]{0,30}|compliant[^\n]{0,40})").unwrap()
});
static SAFETY_GATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)SELV|PELV|mains|hazardous\s*voltage|qualified\s*personnel|isolation\s*domain")
        .unwrap()
});

/// Truncate to a character limit. Field values come from free-form README
/// text and can run long; tables clamp rather than overflow.
fn clamp_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Product code (e.g. `ALM-173-R1`) and product name, from the first real
/// `# ` heading. Banner headings are ignored. Falls back to scanning the
/// whole text for a code, then to the module identifier.
pub fn extract_module_identity(source: &str, module_id: &str) -> (String, String) {
    for line in source.split('\n') {
        let s = line.trim();
        if let Some(rest) = s.strip_prefix("# ") {
            if s.contains('🚧') || s.contains("Project Status") {
                continue;
            }
            let title = strip_emphasis(rest.trim());
            let code = MODULE_CODE
                .find(&title)
                .map(|m| m.as_str().to_string())
                .or_else(|| title.split_whitespace().next().map(str::to_string));
            return match code {
                Some(code) => (code, title),
                None => (module_id.to_string(), title),
            };
        }
    }
    let code = MODULE_CODE
        .find(source)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| module_id.to_string());
    (code.clone(), code)
}

/// One or two description paragraphs from the Overview/Introduction
/// region. Empty when the region yields nothing substantial.
pub fn extract_description(source: &str) -> String {
    let normalized = source.replace("\r\n", "\n");
    let mut paras: Vec<String> = Vec::new();
    let mut in_intro = false;

    for line in normalized.split('\n') {
        let s = line.trim();
        if INTRO_HEADING.is_match(s) {
            in_intro = true;
            continue;
        }
        if !in_intro {
            continue;
        }
        if s.starts_with('#') && !s.starts_with("## ") {
            break;
        }
        if s.starts_with("## ") && !s.contains("Core") && !s.contains("System Role") {
            break;
        }
        if s.starts_with("**") && s.ends_with("**") && s.chars().count() < 80 {
            continue;
        }
        let s = if s.starts_with('>') {
            s.trim_start_matches('>').trim()
        } else {
            s
        };
        if !s.is_empty() && !s.starts_with('|') && !s.starts_with("![") {
            let p = strip_emphasis(s);
            if p.chars().count() > 30 && !paras.contains(&p) {
                paras.push(p);
                if paras.len() >= 2 {
                    break;
                }
            }
        }
    }

    if paras.is_empty() {
        // First substantial line anywhere, as a last resort.
        for line in normalized.split('\n') {
            let p = strip_emphasis(line.trim());
            if p.chars().count() > 50 && !p.starts_with("http") {
                paras.push(p);
                break;
            }
        }
    }

    paras.join(" ")
}

/// (Specification, Details) rows gathered from parameter/specification and
/// subsystem/interface tables, plus two text probes (supply voltage, MCU).
/// Rows without a stated value are dropped, never padded.
pub fn extract_spec_rows(source: &str) -> Vec<(String, String)> {
    let normalized = source.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let mut specs: Vec<(String, String)> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].trim().starts_with('|') {
            i += 1;
            continue;
        }
        let (table, next) = parse_table(&lines, i);
        i = next;

        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| strip_emphasis(cell)).collect())
            .collect();
        if rows.len() < 2 {
            continue;
        }
        let headers: Vec<String> = rows[0].iter().map(|h| h.to_lowercase()).collect();
        let header_has = |needle: &str| headers.iter().any(|h| h.contains(needle));

        // Key ratings / electrical tables: Parameter | Min | Typ | Max | Notes
        // or plain Specification | Details.
        if header_has("parameter") || header_has("specification") {
            for r in &rows[1..] {
                if r.len() < 2 {
                    continue;
                }
                let name = r[0].clone();
                if name.is_empty() || seen.contains(&name) {
                    continue;
                }
                seen.insert(name.clone());
                let details = if r.len() >= 5 && r[1..5].iter().any(|x| !x.is_empty()) {
                    r[1..5]
                        .iter()
                        .filter(|x| !x.trim().is_empty())
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(" / ")
                } else {
                    r[1].trim().to_string()
                };
                if details.is_empty() {
                    continue;
                }
                specs.push((name, details));
            }
        }

        // Subsystem / interface tables: Subsystem | Qty | Description.
        if header_has("subsystem") || header_has("interface") {
            for r in &rows[1..] {
                if r.len() < 2 {
                    continue;
                }
                let name = r[0].clone();
                if name.is_empty() || seen.contains(&name) {
                    continue;
                }
                seen.insert(name.clone());
                let val = r[1].trim().to_string();
                let desc = r.get(2).map(|d| d.trim().to_string()).unwrap_or_default();
                let details = if desc.is_empty() {
                    val
                } else {
                    format!("{}; {}", val, desc)
                };
                if details.is_empty() {
                    continue;
                }
                specs.push((name, details));
            }
        }
    }

    // Supply voltage, only when the text states it and no table row did.
    let names_mention = |needle: &str| {
        specs
            .iter()
            .any(|(name, _)| name.to_lowercase().contains(needle))
    };
    if !names_mention("supply") && !names_mention("power") && SUPPLY_24V.is_match(&normalized) {
        specs.insert(0, ("Power supply".to_string(), "24 V DC (SELV)".to_string()));
    }

    // MCU, only when mentioned.
    if let Some(m) = MCU.find(&normalized) {
        let already = specs
            .iter()
            .any(|(name, _)| name.contains("MCU") || name.to_lowercase().contains("microcontroller"));
        if !already {
            specs.push(("MCU".to_string(), clamp_chars(&strip_emphasis(m.as_str()), 80)));
        }
    }

    specs
}

/// (Category, Specification, Details) rows from fixed installation and
/// mechanical probes. Each probe contributes a row only on a match.
pub fn extract_installation_rows(source: &str) -> Vec<(String, String, String)> {
    let mut rows = Vec::new();

    if let Some(m) = TERMINALS.find(source) {
        rows.push((
            "Terminal Specifications".to_string(),
            "Terminal type / pitch".to_string(),
            clamp_chars(&strip_emphasis(m.as_str()), 120),
        ));
    }
    if let Some(m) = OPERATING_TEMP.find(source) {
        rows.push((
            "Environmental Ratings".to_string(),
            "Operating temperature".to_string(),
            m.as_str().trim().to_string(),
        ));
    }
    if let Some(m) = INGRESS.find(source) {
        rows.push((
            "Environmental Ratings".to_string(),
            "Ingress protection".to_string(),
            m.as_str().to_string(),
        ));
    }
    if let Some(m) = HUMIDITY.find(source) {
        rows.push((
            "Environmental Ratings".to_string(),
            "Relative humidity".to_string(),
            strip_emphasis(m.as_str()),
        ));
    }
    if let Some(m) = DIMENSIONS.find(source) {
        rows.push((
            "Mechanical & Packaging".to_string(),
            "Product dimensions".to_string(),
            m.as_str().to_string(),
        ));
    }
    if let Some(m) = DIN_MOUNT.find(source) {
        rows.push((
            "Mechanical & Packaging".to_string(),
            "Mounting".to_string(),
            m.as_str().to_string(),
        ));
    }
    if let Some(m) = WEIGHT.find(source) {
        rows.push((
            "Mechanical & Packaging".to_string(),
            "Net weight".to_string(),
            m.as_str().to_string(),
        ));
    }

    rows
}

/// Compliance statements and, when isolation/mains language appears, the
/// fixed safety notice.
pub fn extract_compliance(source: &str) -> (Vec<String>, Option<String>) {
    let mut compliance = Vec::new();
    if COMPLIANCE_GATE.is_match(source) {
        for m in COMPLIANCE_ITEM.find_iter(source) {
            compliance.push(strip_emphasis(m.as_str()));
        }
    }
    let safety = SAFETY_GATE
        .is_match(source)
        .then(|| SAFETY_NOTICE.to_string());
    (compliance, safety)
}

/// Assemble a summary datasheet from raw README text.
pub fn assemble(source: &str, module_id: &str, part_no: &str, publisher: &str) -> Datasheet {
    let (code, name) = extract_module_identity(source, module_id);
    let display_name = if name.is_empty() { code } else { name };

    let mut sections = Vec::new();

    let desc = extract_description(source);
    sections.push(DatasheetSection {
        heading: "Product Description".to_string(),
        body: if desc.is_empty() {
            SectionBody::Placeholder(format!(
                "{}. See module README for full description.",
                display_name
            ))
        } else {
            SectionBody::Blocks(vec![Block::Paragraph(desc)])
        },
    });

    let specs = extract_spec_rows(source);
    sections.push(DatasheetSection {
        heading: "Technical Specifications".to_string(),
        body: if specs.is_empty() {
            SectionBody::Placeholder("See module README for technical specifications.".to_string())
        } else {
            let mut table_rows = vec![vec!["Specification".to_string(), "Details".to_string()]];
            table_rows.extend(
                specs
                    .into_iter()
                    .map(|(name, details)| vec![clamp_chars(&name, 200), clamp_chars(&details, 400)]),
            );
            SectionBody::Blocks(vec![Block::Table(Table::new(table_rows))])
        },
    });

    let inst = extract_installation_rows(source);
    sections.push(DatasheetSection {
        heading: "Installation, Environmental & Mechanical".to_string(),
        body: if inst.is_empty() {
            SectionBody::Placeholder(
                "See module README for installation and mechanical data.".to_string(),
            )
        } else {
            let mut table_rows = vec![vec![
                "Category".to_string(),
                "Specification".to_string(),
                "Details".to_string(),
            ]];
            table_rows.extend(inst.into_iter().map(|(cat, spec, details)| {
                vec![
                    clamp_chars(&cat, 100),
                    clamp_chars(&spec, 100),
                    clamp_chars(&details, 200),
                ]
            }));
            SectionBody::Blocks(vec![Block::Table(Table::new(table_rows))])
        },
    });

    let (compliance, safety) = extract_compliance(source);
    let mut compliance_blocks: Vec<Block> =
        compliance.into_iter().map(Block::Paragraph).collect();
    if let Some(notice) = safety {
        compliance_blocks.push(Block::Paragraph(notice));
    }
    sections.push(DatasheetSection {
        heading: "Compliance & Certifications".to_string(),
        body: if compliance_blocks.is_empty() {
            SectionBody::Placeholder("See module README for compliance information.".to_string())
        } else {
            SectionBody::Blocks(compliance_blocks)
        },
    });

    sections.push(DatasheetSection {
        heading: "Published by".to_string(),
        body: SectionBody::Blocks(
            publisher
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| Block::Paragraph(line.trim().to_string()))
                .collect(),
        ),
    });

    Datasheet {
        title: display_name,
        tagline: None,
        part_no: Some(part_no.to_string()),
        sections,
    }
}
