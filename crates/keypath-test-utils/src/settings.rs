//! [`SettingsDir`] fixture and sample settings files.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A user `settings.json` with comments, a literal dotted key, and the same
/// key path spelled as nested objects.
pub const USER_SETTINGS_JSONC: &str = r#"// Place your settings in this file to overwrite the default settings
{
    "editor.fontSize": 14,
    "editor": {
        "fontSize": 12,
        "tabSize": 4
    },
    /* Extension settings */
    "myext.trace": "verbose",
    "myext": {
        "depth": 0,
        "enabled": false,
    },
    "files.exclude": {
        "**/.git": true,
    },
}
"#;

/// Equivalent settings as TOML.
pub const SETTINGS_TOML: &str = r#""editor.fontSize" = 14
"myext.trace" = "verbose"

[editor]
fontSize = 12
tabSize = 4

[myext]
depth = 0
enabled = false
"#;

/// Equivalent settings as YAML.
pub const SETTINGS_YAML: &str = r#"editor.fontSize: 14
editor:
  fontSize: 12
  tabSize: 4
myext.trace: verbose
myext:
  depth: 0
  enabled: false
"#;

/// A temporary directory holding settings files.
///
/// # Example
///
/// ```rust,no_run
/// use keypath_test_utils::settings::{SettingsDir, USER_SETTINGS_JSONC};
///
/// let dir = SettingsDir::new();
/// let path = dir.write("User/settings.json", USER_SETTINGS_JSONC);
/// assert!(path.exists());
/// ```
pub struct SettingsDir {
    temp_dir: TempDir,
}

impl Default for SettingsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` (relative to the root), whether or not it
    /// exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name` (relative to the root), creating parent
    /// directories, and return the absolute path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|_| panic!("Could not write fixture: {}", path.display()));
        path
    }
}
