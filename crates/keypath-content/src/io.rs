//! File reading

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read a settings file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading settings file");
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
