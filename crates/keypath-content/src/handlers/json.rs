//! JSON format handler

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};

/// Handler for JSON files
///
/// Editor settings files named `.json` routinely carry comments and trailing
/// commas. Strict parsing is tried first; on failure the source is retried as
/// JSON5, and the strict error is reported if both fail.
#[derive(Debug, Default)]
pub struct JsonHandler;

impl JsonHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FormatHandler for JsonHandler {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse(&self, source: &str) -> Result<Value> {
        match serde_json::from_str::<Value>(source) {
            Ok(value) => Ok(value),
            Err(strict) => {
                debug!(error = %strict, "strict JSON parse failed, retrying as JSON5");
                ::json5::from_str::<Value>(source)
                    .map_err(|_| Error::parse("JSON", strict.to_string()))
            }
        }
    }
}
