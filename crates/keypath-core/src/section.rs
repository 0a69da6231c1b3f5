//! Scoped views over a configuration tree

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::resolve;

/// A view of a tree under a dotted prefix.
///
/// Keys passed to a section are qualified with its prefix and then resolved
/// against the root tree, so a literal key such as `"myext.trace"` at the
/// root is found just like a nested `myext: { trace: ... }`.
///
/// # Examples
///
/// ```
/// use keypath_core::Section;
/// use serde_json::json;
///
/// let tree = json!({"myext.trace": true, "myext": {"depth": 2}});
/// let section = Section::new(&tree, "myext");
/// assert_eq!(section.get("trace").unwrap(), &json!(true));
/// assert_eq!(section.get("depth").unwrap(), &json!(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    tree: &'a Value,
    prefix: String,
}

impl<'a> Section<'a> {
    /// Create a section over `tree`. An empty prefix addresses the root.
    pub fn new(tree: &'a Value, prefix: impl Into<String>) -> Self {
        Self {
            tree,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The root tree this section resolves against
    pub fn tree(&self) -> &'a Value {
        self.tree
    }

    /// The full dotted key for `key` within this section.
    pub fn qualify(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    /// A nested section, e.g. `myext` -> `myext.logging`.
    pub fn section(&self, name: &str) -> Section<'a> {
        Section::new(self.tree, self.qualify(name))
    }

    pub fn find(&self, key: &str) -> Option<&'a Value> {
        resolve::find(self.tree, &self.qualify(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn get(&self, key: &str) -> Result<&'a Value> {
        resolve::resolve(self.tree, &self.qualify(key))
    }

    pub fn get_or(&self, key: &str, default: &'a Value) -> &'a Value {
        resolve::resolve_or(self.tree, &self.qualify(key), default)
    }

    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        resolve::resolve_as(self.tree, &self.qualify(key))
    }

    pub fn get_as_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        resolve::resolve_as_or(self.tree, &self.qualify(key), default)
    }
}
