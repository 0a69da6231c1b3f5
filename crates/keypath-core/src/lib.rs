//! Dotted-key resolution over nested configuration trees.
//!
//! Configuration keys may legitimately contain dots (`"files.exclude"` stored
//! as a single key) while the same text can also address nested structure
//! (`files: { exclude: ... }`). The resolver in [`resolve`] tries the longest
//! literal key first and only then descends into nested mappings, so both
//! conventions can live in one tree.
//!
//! # Examples
//!
//! ```
//! use keypath_core::{resolve, resolve_or};
//! use serde_json::json;
//!
//! let tree = json!({"editor.fontSize": 14, "editor": {"tabSize": 4}});
//! assert_eq!(resolve(&tree, "editor.fontSize").unwrap(), &json!(14));
//! assert_eq!(resolve(&tree, "editor.tabSize").unwrap(), &json!(4));
//!
//! let fallback = json!(false);
//! assert_eq!(resolve_or(&tree, "editor.wordWrap", &fallback), &json!(false));
//! ```

pub mod error;
pub mod path;
pub mod resolve;
pub mod section;

pub use error::{Error, Result};
pub use path::{KeySplit, KeySplits, split_key};
pub use resolve::{contains, find, lookup, resolve, resolve_as, resolve_as_or, resolve_or};
pub use section::Section;
