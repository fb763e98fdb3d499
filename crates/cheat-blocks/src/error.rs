//! Error types for cheat-blocks

use std::path::PathBuf;

/// Result type for cheat-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and segmenting a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {language} heading pattern `{pattern}`: {source}")]
    InvalidPattern {
        language: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn pattern(
        language: impl Into<String>,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::InvalidPattern {
            language: language.into(),
            pattern: pattern.into(),
            source,
        }
    }
}
