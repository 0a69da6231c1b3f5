//! Error types for keypath-core

use serde_json::Value;

/// Result type for keypath-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving dotted keys
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Every prefix/suffix split was tried and the caller supplied no default
    #[error("Could not find key '{key}' in the config.")]
    KeyNotFound {
        /// The dotted key exactly as requested
        key: String,
        /// The root tree that was searched
        tree: Box<Value>,
    },

    /// The key resolved, but the value could not be deserialized as requested
    #[error("Value at '{key}' has an unexpected type: {message}")]
    TypeMismatch { key: String, message: String },
}

impl Error {
    pub fn key_not_found(key: impl Into<String>, tree: &Value) -> Self {
        Self::KeyNotFound {
            key: key.into(),
            tree: Box::new(tree.clone()),
        }
    }

    pub fn type_mismatch(key: impl Into<String>, message: impl ToString) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// The dotted key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::KeyNotFound { key, .. } | Self::TypeMismatch { key, .. } => key,
        }
    }

    /// Whether this error means the key does not exist at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
