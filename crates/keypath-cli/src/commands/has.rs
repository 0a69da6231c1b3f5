//! `keypath has`

use crate::cli::SourceArgs;
use crate::commands::load_document;
use crate::error::Result;

/// Print `true` or `false` depending on whether `key` exists
pub fn run_has(source: &SourceArgs, key: &str) -> Result<()> {
    println!("{}", has_key(source, key)?);
    Ok(())
}

pub fn has_key(source: &SourceArgs, key: &str) -> Result<bool> {
    let doc = load_document(source)?;
    let section = doc.section(source.section.as_deref().unwrap_or_default());
    Ok(section.contains(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypath_content::Format;
    use keypath_test_utils::settings::{SETTINGS_YAML, SettingsDir};

    #[test]
    fn test_has_key() {
        let dir = SettingsDir::new();
        let args = SourceArgs {
            file: dir.write("settings.txt", SETTINGS_YAML),
            format: Some(Format::Yaml),
            section: None,
        };

        assert!(has_key(&args, "myext.trace").unwrap());
        assert!(has_key(&args, "editor.fontSize").unwrap());
        assert!(!has_key(&args, "editor.fontSize.x").unwrap());
    }

    #[test]
    fn test_has_key_missing_file() {
        let dir = SettingsDir::new();
        let args = SourceArgs {
            file: dir.path("nope.json"),
            format: None,
            section: None,
        };
        assert!(has_key(&args, "a").is_err());
    }
}
