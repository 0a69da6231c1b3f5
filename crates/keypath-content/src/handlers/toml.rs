//! TOML format handler using toml_edit

use serde_json::{Map, Value};
use toml_edit::DocumentMut;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};

/// Handler for TOML files
///
/// Quoted keys such as `"files.exclude" = ...` are kept as single literal
/// keys, so they shadow the nested `[files]` table the same way dotted JSON
/// keys do.
#[derive(Debug, Default)]
pub struct TomlHandler;

impl TomlHandler {
    pub fn new() -> Self {
        Self
    }
}

fn table_to_json<'a>(entries: impl Iterator<Item = (&'a str, Value)>) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.to_string(), value);
    }
    Value::Object(map)
}

fn item_to_json(item: &toml_edit::Item) -> Value {
    match item {
        toml_edit::Item::Value(v) => value_to_json(v),
        toml_edit::Item::Table(t) => table_to_json(t.iter().map(|(k, v)| (k, item_to_json(v)))),
        toml_edit::Item::ArrayOfTables(arr) => Value::Array(
            arr.iter()
                .map(|t| table_to_json(t.iter().map(|(k, v)| (k, item_to_json(v)))))
                .collect(),
        ),
        toml_edit::Item::None => Value::Null,
    }
}

fn value_to_json(v: &toml_edit::Value) -> Value {
    match v {
        toml_edit::Value::String(s) => Value::String(s.value().to_string()),
        toml_edit::Value::Integer(i) => Value::Number((*i.value()).into()),
        toml_edit::Value::Float(f) => serde_json::Number::from_f64(*f.value())
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml_edit::Value::Boolean(b) => Value::Bool(*b.value()),
        toml_edit::Value::Datetime(d) => Value::String(d.value().to_string()),
        toml_edit::Value::Array(arr) => Value::Array(arr.iter().map(value_to_json).collect()),
        toml_edit::Value::InlineTable(t) => {
            table_to_json(t.iter().map(|(k, v)| (k, value_to_json(v))))
        }
    }
}

impl FormatHandler for TomlHandler {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn parse(&self, source: &str) -> Result<Value> {
        let doc: DocumentMut = source
            .parse()
            .map_err(|e: toml_edit::TomlError| Error::parse("TOML", e.to_string()))?;

        Ok(item_to_json(doc.as_item()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_toml_tables_and_values() {
        let handler = TomlHandler::new();
        let source = r#"
title = "settings"
ratio = 0.5

[editor]
fontSize = 14
rulers = [80, 120]
minimap = { enabled = false }

[[servers]]
host = "a"

[[servers]]
host = "b"
"#;
        let value = handler.parse(source).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "settings",
                "ratio": 0.5,
                "editor": {"fontSize": 14, "rulers": [80, 120], "minimap": {"enabled": false}},
                "servers": [{"host": "a"}, {"host": "b"}]
            })
        );
    }

    #[test]
    fn test_toml_quoted_dotted_key_is_literal() {
        let handler = TomlHandler::new();
        let value = handler.parse("\"files.exclude\" = true\n").unwrap();
        assert_eq!(value, json!({"files.exclude": true}));
    }

    #[test]
    fn test_toml_bare_dotted_key_is_nested() {
        let handler = TomlHandler::new();
        let value = handler.parse("files.exclude = true\n").unwrap();
        assert_eq!(value, json!({"files": {"exclude": true}}));
    }

    #[test]
    fn test_toml_datetime_becomes_string() {
        let handler = TomlHandler::new();
        let value = handler.parse("released = 1979-05-27\n").unwrap();
        assert_eq!(value, json!({"released": "1979-05-27"}));
    }

    #[test]
    fn test_toml_parse_error() {
        let handler = TomlHandler::new();
        let err = handler.parse("[unclosed").unwrap_err();
        assert!(matches!(err, Error::Parse { ref format, .. } if format == "TOML"));
    }
}
