//! Error types for cheat-catalog

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Document error: {0}")]
    Blocks(#[from] cheat_blocks::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown language: {prefix}")]
    UnknownLanguage { prefix: String },

    #[error("Language registered more than once: {prefix}")]
    DuplicateLanguage { prefix: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
