//! `keypath get`

use keypath_core::lookup;
use serde_json::Value;

use crate::cli::SourceArgs;
use crate::commands::load_document;
use crate::error::Result;

/// Print the value at `key`, or `default` when the key does not exist
pub fn run_get(source: &SourceArgs, key: &str, default: Option<&str>, raw: bool) -> Result<()> {
    println!("{}", get_value(source, key, default, raw)?);
    Ok(())
}

/// Resolve `key` and render it for output
pub fn get_value(
    source: &SourceArgs,
    key: &str,
    default: Option<&str>,
    raw: bool,
) -> Result<String> {
    let doc = load_document(source)?;
    let section = doc.section(source.section.as_deref().unwrap_or_default());
    let default = default.map(parse_default);

    let value = lookup(section.tree(), &section.qualify(key), default.as_ref())?;
    Ok(render_value(value, raw))
}

/// A `--default` argument is JSON when it parses as JSON, a string otherwise
pub fn parse_default(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

/// Pretty JSON, or the bare string when `raw` is set and the value is one
pub fn render_value(value: &Value, raw: bool) -> String {
    match value {
        Value::String(s) if raw => s.clone(),
        _ => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use keypath_test_utils::settings::{SettingsDir, USER_SETTINGS_JSONC};
    use serde_json::json;

    fn source(dir: &SettingsDir, section: Option<&str>) -> SourceArgs {
        SourceArgs {
            file: dir.write("settings.json", USER_SETTINGS_JSONC),
            format: None,
            section: section.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_default() {
        assert_eq!(parse_default("12"), json!(12));
        assert_eq!(parse_default("null"), Value::Null);
        assert_eq!(parse_default("{\"a\": true}"), json!({"a": true}));
        assert_eq!(parse_default("off"), json!("off"));
        assert_eq!(parse_default(""), json!(""));
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("verbose"), false), "\"verbose\"");
        assert_eq!(render_value(&json!("verbose"), true), "verbose");
        assert_eq!(render_value(&json!(14), true), "14");
        assert_eq!(render_value(&json!({"a": 1}), false), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_get_value_literal_key() {
        let dir = SettingsDir::new();
        let args = source(&dir, None);
        assert_eq!(get_value(&args, "editor.fontSize", None, false).unwrap(), "14");
        assert_eq!(get_value(&args, "editor.tabSize", None, false).unwrap(), "4");
    }

    #[test]
    fn test_get_value_in_section() {
        let dir = SettingsDir::new();
        let args = source(&dir, Some("myext"));
        assert_eq!(get_value(&args, "trace", None, true).unwrap(), "verbose");
        assert_eq!(get_value(&args, "enabled", None, false).unwrap(), "false");
    }

    #[test]
    fn test_get_value_default() {
        let dir = SettingsDir::new();
        let args = source(&dir, None);
        assert_eq!(get_value(&args, "missing", Some("null"), false).unwrap(), "null");
        assert_eq!(get_value(&args, "missing", Some("off"), true).unwrap(), "off");
    }

    #[test]
    fn test_get_value_missing_key() {
        let dir = SettingsDir::new();
        let args = source(&dir, Some("myext"));
        let err = get_value(&args, "missing", None, false).unwrap_err();
        assert!(matches!(err, CliError::Core(ref e) if e.key() == "myext.missing"));
    }
}
