//! # mdsheet-parser
//!
//! Markdown section parser for the mdsheet toolchain.
//!
//! Product READMEs are flat markdown documents: a title heading, a handful
//! of `#`/`##` sections, and bodies made of paragraphs, bullet lists, block
//! quotes, pipe tables and the occasional `###` sub-heading. This crate
//! turns such a document into an ordered sequence of [`Section`] records
//! whose bodies are typed [`Block`] values, with markdown inline syntax
//! (images, links) already normalized away.
//!
//! The parse is a single top-to-bottom line walk with no lookahead beyond
//! the current block. It never invents content: blank lines produce no
//! blocks, and a line whose text normalizes to nothing is dropped.
//!
//! Entry points:
//! - [`markdown::parse_sections`] for in-memory sources
//! - [`loader::DocumentLoader`] for files (UTF-8, lossy decode)

pub mod loader;
pub mod markdown;

pub use loader::{DocumentLoader, LoaderError};
pub use markdown::ast::{Block, Section, SectionLevel, Table};
pub use markdown::parse_sections;
