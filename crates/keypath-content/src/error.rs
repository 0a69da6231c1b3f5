//! Error types for keypath-content

use std::path::PathBuf;

/// Result type for keypath-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying settings documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} content: {message}")]
    Parse { format: String, message: String },

    #[error("Unsupported format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("{format} document root must be a mapping")]
    NotAMapping { format: String },

    #[error(transparent)]
    Lookup(#[from] keypath_core::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }
}
