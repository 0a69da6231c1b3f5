//! Settings document type

use std::path::{Path, PathBuf};

use keypath_core::Section;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::format::Format;
use crate::handlers::handler_for;
use crate::io;

/// A parsed settings file: its format, where it came from, and the
/// configuration tree it holds.
///
/// The tree root is always a mapping. Whitespace-only sources parse to an
/// empty mapping in every format.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDocument {
    path: Option<PathBuf>,
    format: Format,
    tree: Value,
}

impl SettingsDocument {
    /// Parse content with format auto-detection, defaulting to JSON
    pub fn parse(source: &str) -> Result<Self> {
        let format = Format::from_content(source).unwrap_or(Format::Json);
        Self::parse_as(source, format)
    }

    /// Parse with explicit format
    pub fn parse_as(source: &str, format: Format) -> Result<Self> {
        let tree = if source.trim().is_empty() {
            Value::Object(Map::new())
        } else {
            handler_for(format).parse(source)?
        };

        if !tree.is_object() {
            return Err(Error::NotAMapping {
                format: format.name().to_string(),
            });
        }

        Ok(Self {
            path: None,
            format,
            tree,
        })
    }

    /// Load a settings file, detecting the format from its extension and
    /// then from its content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = io::read_text(path)?;

        let format = Format::from_path(path)
            .or_else(|| Format::from_content(&source))
            .ok_or_else(|| Error::UnsupportedFormat {
                extension: path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            })?;

        Self::from_source(path, &source, format)
    }

    /// Load a settings file with an explicit format
    pub fn load_as(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        let source = io::read_text(path)?;
        Self::from_source(path, &source, format)
    }

    fn from_source(path: &Path, source: &str, format: Format) -> Result<Self> {
        let mut doc = Self::parse_as(source, format)?;
        debug!(path = %path.display(), %format, "loaded settings document");
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Get the document format
    pub fn format(&self) -> Format {
        self.format
    }

    /// The file this document was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn tree(&self) -> &Value {
        &self.tree
    }

    pub fn into_tree(self) -> Value {
        self.tree
    }

    /// Resolve a dotted key, failing if it does not exist
    pub fn get(&self, key: &str) -> Result<&Value> {
        Ok(keypath_core::resolve(&self.tree, key)?)
    }

    /// Resolve a dotted key, returning `default` if it does not exist
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        keypath_core::resolve_or(&self.tree, key, default)
    }

    /// Resolve a dotted key and deserialize it
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        Ok(keypath_core::resolve_as(&self.tree, key)?)
    }

    pub fn contains(&self, key: &str) -> bool {
        keypath_core::contains(&self.tree, key)
    }

    /// A view of this document under `prefix`
    pub fn section(&self, prefix: &str) -> Section<'_> {
        Section::new(&self.tree, prefix)
    }
}
