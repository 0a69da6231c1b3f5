//! Command implementations for keypath-cli

pub mod get;
pub mod has;

pub use get::run_get;
pub use has::run_has;

use keypath_content::SettingsDocument;
use tracing::debug;

use crate::cli::SourceArgs;
use crate::error::Result;

/// Load the settings file named by `source`, honoring an explicit format.
pub fn load_document(source: &SourceArgs) -> Result<SettingsDocument> {
    let doc = match source.format {
        Some(format) => SettingsDocument::load_as(&source.file, format)?,
        None => SettingsDocument::load(&source.file)?,
    };
    debug!(file = %source.file.display(), format = %doc.format(), "settings loaded");
    Ok(doc)
}
