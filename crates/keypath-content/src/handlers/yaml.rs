//! YAML format handler

use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;
use tracing::debug;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};

/// Handler for YAML files
#[derive(Debug, Default)]
pub struct YamlHandler;

impl YamlHandler {
    pub fn new() -> Self {
        Self
    }
}

/// Mapping keys become strings; keys that are themselves collections are
/// dropped since no dotted key can address them. Keys that collapse to the
/// same string (`1` and `"1"`) keep the value that appears last.
fn key_to_string(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Null => Some("null".to_string()),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}

fn yaml_to_json(value: &YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(arr) => Value::Array(arr.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(map) => {
            let mut json_map = Map::new();
            for (k, v) in map {
                if let Some(key) = key_to_string(k) {
                    if json_map.contains_key(&key) {
                        debug!(%key, "YAML keys collapse to one string, keeping the later value");
                    }
                    json_map.insert(key, yaml_to_json(v));
                }
            }
            Value::Object(json_map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

impl FormatHandler for YamlHandler {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn parse(&self, source: &str) -> Result<Value> {
        let yaml_value: YamlValue =
            serde_yaml::from_str(source).map_err(|e| Error::parse("YAML", e.to_string()))?;

        Ok(yaml_to_json(&yaml_value))
    }
}
