//! Format registry
//!
//! Centralized discovery and selection of output formats. The CLI resolves
//! its `--format` argument against this registry.

use std::collections::HashMap;

use crate::datasheet::Datasheet;
use crate::error::FormatError;
use crate::format::Format;

/// Registry of datasheet formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats.insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Option<&dyn Format> {
        self.formats.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Serialize a datasheet using the named format
    pub fn serialize(&self, sheet: &Datasheet, format: &str) -> Result<Vec<u8>, FormatError> {
        let fmt = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        fmt.serialize(sheet)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::docx::DocxFormat);
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::tag::TagFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
