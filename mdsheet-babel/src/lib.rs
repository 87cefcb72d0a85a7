//! Datasheet composition and output formats for mdsheet
//!
//!     This crate takes the section sequences produced by mdsheet-parser and
//!     turns them into finished datasheet documents. It owns everything
//!     between "parsed README" and "bytes on disk":
//!
//!     - the canonical section plan and the heading-alias matcher
//!     - the two assembly strategies (structural copy, selective extraction)
//!     - the Datasheet document model
//!     - the Format trait, the FormatRegistry and the format implementations
//!       (docx, markdown, tag)
//!
//!     This is a pure lib: it powers the mdsheet CLI but is shell agnostic.
//!     No code here prints, reads environment variables or touches paths;
//!     file placement and status output belong to the CLI.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # FormatError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── datasheet
//!     │   ├── matcher.rs          # heading normalization + alias matching
//!     │   ├── structural.rs       # "full" assembly strategy
//!     │   └── selective.rs        # "summary" assembly strategy
//!     ├── formats
//!     │   ├── docx/               # production output (docx-rs)
//!     │   ├── json/               # machine-readable model dump
//!     │   ├── markdown/           # inspection / round-trip surface
//!     │   └── tag/                # debug tree rendering
//!     └── lib.rs
//!
//! Content integrity
//!
//!     The matcher's semantics (normalization, bidirectional containment,
//!     first match wins) are a compatibility contract: changing them would
//!     silently change which README section fills which datasheet slot.
//!     The selective strategy adds the stricter rule that no extracted row
//!     may exist without literal textual evidence in the source.

pub mod datasheet;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use datasheet::{Datasheet, DatasheetSection, SectionBody, SectionPlan};
pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
