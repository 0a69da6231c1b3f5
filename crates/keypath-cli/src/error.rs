//! Error types for keypath-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from keypath-content
    #[error(transparent)]
    Content(#[from] keypath_content::Error),

    /// Error from keypath-core
    #[error(transparent)]
    Core(#[from] keypath_core::Error),
}
