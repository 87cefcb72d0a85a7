//! Error types for datasheet composition and serialization

use std::fmt;

/// Error that can occur when producing an output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = FormatError::FormatNotFound("pdf".to_string());
        assert_eq!(format!("{err}"), "Format 'pdf' not found");

        let err = FormatError::Serialization("bad zip".to_string());
        assert_eq!(format!("{err}"), "Serialization error: bad zip");
    }
}
