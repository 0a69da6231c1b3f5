//! End-to-end tests over the settings fixtures
//!
//! The same settings are stored as JSON with comments, TOML, and YAML. Each
//! file mixes literal dotted keys with nested objects for the same paths.

use std::path::PathBuf;

use keypath_content::{Format, SettingsDocument};
use keypath_core::{Section, lookup};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use serde_json::{Value, json};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/settings")
        .join(name)
}

fn load(name: &str) -> SettingsDocument {
    SettingsDocument::load(fixture(name)).unwrap()
}

#[test]
fn test_fixtures_describe_the_same_tree() {
    let json = load("settings.json");
    let toml = load("settings.toml");
    let yaml = load("settings.yaml");

    assert_eq!(json.format(), Format::Json);
    assert_eq!(toml.format(), Format::Toml);
    assert_eq!(yaml.format(), Format::Yaml);

    assert_eq!(json.tree(), toml.tree());
    assert_eq!(json.tree(), yaml.tree());
}

#[rstest]
fn test_resolves_across_formats(
    #[values("settings.json", "settings.toml", "settings.yaml")] name: &str,
    #[values(
        ("editor.fontSize", json!(14)),
        ("editor.tabSize", json!(4)),
        ("editor.minimap.enabled", json!(false)),
        ("editor.minimap.side", json!("right")),
        ("files.exclude.**/.git", json!(true)),
        ("files.exclude.**/dist", json!(true)),
        ("files.autoSave", json!("afterDelay")),
        ("promptDebug.trace", json!("verbose")),
        ("promptDebug.depth", json!(0)),
        ("promptDebug.open", json!("")),
        ("promptDebug.paths", json!(["src", "test"]))
    )]
    case: (&str, Value),
) {
    let (key, expected) = case;
    let doc = load(name);
    assert_eq!(doc.get(key).unwrap(), &expected, "{name}: {key}");
}

#[rstest]
fn test_unresolvable_across_formats(
    #[values("settings.json", "settings.toml", "settings.yaml")] name: &str,
    #[values(
        "editor.fontSize.size",
        "promptDebug.missing",
        "files.exclude.**/build",
        "promptDebug.paths.0"
    )]
    key: &str,
) {
    let doc = load(name);
    assert!(!doc.contains(key), "{name}: {key}");

    let fallback = Value::Null;
    assert_eq!(lookup(doc.tree(), key, Some(&fallback)).unwrap(), &Value::Null);
}

#[derive(Debug, Deserialize, PartialEq)]
struct PromptDebug {
    depth: u32,
    open: String,
    paths: Vec<String>,
}

#[test]
fn test_typed_section() {
    let doc = load("settings.json");

    let nested: PromptDebug = doc.get_as("promptDebug").unwrap();
    assert_eq!(
        nested,
        PromptDebug {
            depth: 0,
            open: String::new(),
            paths: vec!["src".into(), "test".into()],
        }
    );

    // The literal key at the root is still reachable through the section
    let section = Section::new(doc.tree(), "promptDebug");
    assert_eq!(section.get_as::<String>("trace").unwrap(), "verbose");
    assert!(section.get_as_or::<bool>("enabled", true).unwrap());
}

#[test]
fn test_lookup_leaves_document_untouched() {
    let doc = load("settings.yaml");
    let before = doc.clone();

    for key in ["editor.fontSize", "files.exclude.**/dist", "nope"] {
        let _ = doc.get(key);
    }

    assert_eq!(doc, before);
}
