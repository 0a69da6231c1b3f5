//! JSON5 format handler

use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};

/// Handler for JSON5 and JSON-with-comments files
#[derive(Debug, Default)]
pub struct Json5Handler;

impl Json5Handler {
    pub fn new() -> Self {
        Self
    }
}

impl FormatHandler for Json5Handler {
    fn format(&self) -> Format {
        Format::Json5
    }

    fn parse(&self, source: &str) -> Result<Value> {
        ::json5::from_str(source).map_err(|e| Error::parse("JSON5", e.to_string()))
    }
}
