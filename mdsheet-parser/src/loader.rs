//! Document loading utilities
//!
//! `DocumentLoader` loads README source text from a file or a string and
//! hands it to the section parser. File bytes are decoded as UTF-8 with
//! invalid sequences replaced, because shipped READMEs occasionally carry
//! stray codepage bytes and a mangled character is better than a failed
//! module.

use std::fs;
use std::path::Path;

use crate::markdown::ast::Section;
use crate::markdown::parse_sections;

/// Error that can occur when loading documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// IO error when reading the file
    Io(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Source loader with parse shortcuts
///
/// # Example
///
/// ```ignore
/// let sections = DocumentLoader::from_path("ALM-173-R1/README.md")?.parse();
/// ```
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path, decoding lossily.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let bytes = fs::read(path)?;
        Ok(DocumentLoader {
            source: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Parse the source into its section sequence
    pub fn parse(&self) -> Vec<Section> {
        parse_sections(&self.source)
    }

    /// The raw source text
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("# Hello\n");
        assert_eq!(loader.source(), "# Hello\n");
    }

    #[test]
    fn test_from_path_nonexistent() {
        let result = DocumentLoader::from_path("no-such-file.md");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse() {
        let loader = DocumentLoader::from_string("# Title\n\nbody\n");
        let sections = loader.parse();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Title");
    }

    #[test]
    fn test_from_path_lossy_decode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# Title\n\ninvalid \xff byte\n").unwrap();
        let loader = DocumentLoader::from_path(file.path()).unwrap();
        assert!(loader.source().contains('\u{FFFD}'));
        let sections = loader.parse();
        assert_eq!(sections[0].title, "Title");
    }

    #[test]
    fn test_error_display() {
        let err = LoaderError::Io("denied".to_string());
        assert_eq!(format!("{}", err), "IO error: denied");
    }
}
