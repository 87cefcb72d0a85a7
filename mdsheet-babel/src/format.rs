//! Format trait definition
//!
//! A `Format` turns an assembled [`Datasheet`] into output bytes. DOCX is a
//! binary zip container, so the uniform return type is `Vec<u8>`; text
//! formats produce UTF-8.

use crate::datasheet::Datasheet;
use crate::error::FormatError;

/// Trait for datasheet output formats
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "docx", "markdown", "tag")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extension for output files, without the dot
    fn file_extension(&self) -> &str;

    /// Serialize a datasheet into output bytes
    fn serialize(&self, sheet: &Datasheet) -> Result<Vec<u8>, FormatError>;
}
