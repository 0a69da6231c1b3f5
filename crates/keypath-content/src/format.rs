//! Format detection and handler trait

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Supported settings formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Strict JSON, with a lenient retry for commented files
    Json,
    /// JSON5, which also covers JSON with comments and trailing commas
    Json5,
    Toml,
    Yaml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "json5" | "jsonc" => Some(Self::Json5),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Detect format from content heuristics
    pub fn from_content(content: &str) -> Option<Self> {
        let trimmed = content.trim_start();

        if trimmed.starts_with('{') {
            return Some(Self::Json);
        }

        // Leading comments are common in editor settings files
        if trimmed.starts_with("//") || trimmed.starts_with("/*") {
            return Some(Self::Json5);
        }

        let mut lines = trimmed
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));

        let first = lines.next()?;

        // TOML has [section] headers or key = value, with `=` ahead of any `:`
        let assigns = match (first.find(" = "), first.find(':')) {
            (Some(eq), Some(colon)) => eq < colon,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if (first.starts_with('[') && first.ends_with(']')) || assigns {
            return Some(Self::Toml);
        }

        // YAML has key: value or a document marker
        if first == "---" || first.contains(": ") || first.ends_with(':') {
            return Some(Self::Yaml);
        }

        None
    }

    /// Human readable format name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Json5 => "JSON5",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s).ok_or_else(|| Error::UnsupportedFormat {
            extension: s.to_string(),
        })
    }
}

/// Trait for format-specific handlers
pub trait FormatHandler: Send + Sync {
    /// Format identifier
    fn format(&self) -> Format;

    /// Parse source into a configuration tree
    fn parse(&self, source: &str) -> Result<Value>;
}
