//! Markdown section parsing
//!
//! The grammar handled here is deliberately small: it is the subset of
//! markdown that actually occurs in module READMEs, parsed line-by-line.
//!
//! Structure
//!
//!     - `# ` opens a top-level section, `## ` opens a sub-section
//!     - a section body runs until the next `# `/`## ` line
//!     - lines before the first heading are not content
//!
//! Body classification (first match wins, on the trimmed line):
//!
//!     | prefix          | block                                  |
//!     |-----------------|----------------------------------------|
//!     | `### `/`#### `  | SubHeading                             |
//!     | `\|`            | Table (consumes consecutive `\|` lines) |
//!     | `>`             | Quote                                  |
//!     | `- `/`* `/`1. ` | ListItem                               |
//!     | anything else   | Paragraph                              |
//!
//! Inline image/link syntax is normalized on every extracted text, see
//! [`inline`]. Known boilerplate preambles are removed before the walk,
//! see [`preamble`].

pub mod ast;
pub mod inline;
pub mod parser;
pub mod preamble;
pub mod serializer;
pub mod tables;

pub use parser::parse_sections;
pub use serializer::{serialize_blocks, serialize_sections};
