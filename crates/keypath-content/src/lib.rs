//! Settings document parsing for keypath
//!
//! Loads JSON, JSON with comments (JSON5), TOML, and YAML settings files
//! into a configuration tree and answers dotted-key lookups against it.

pub mod document;
pub mod error;
pub mod format;
pub mod handlers;
pub mod io;

pub use document::SettingsDocument;
pub use error::{Error, Result};
pub use format::{Format, FormatHandler};
