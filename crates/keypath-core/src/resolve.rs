//! Hierarchical key resolution
//!
//! At each level the resolver tries the longest literal key first. If a
//! literal key matches but does not cover the whole dotted key, it descends
//! into the matched value (only when that value is a mapping) with the
//! leftover segments. A miss inside such a descent is not an error: the
//! resolver goes back to trying shorter prefixes at the current level.
//!
//! Preference order, for `{"a.b": 7, "a": {"b": 9}}` and key `a.b`:
//!
//! 1. literal match with nothing left over (`"a.b"` -> `7`)
//! 2. literal match followed by a nested lookup (`"a"` then `b` -> `9`)
//! 3. shorter literal prefixes, in order
//!
//! Two "absent" states are kept apart. A caller omits a default by passing
//! `None` to [`lookup`], which turns an exhausted search into
//! [`Error::KeyNotFound`]. Internally a nested miss is `None` from [`find`],
//! which never raises and lets the outer level keep searching.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::path::{KeySplits, split_key};

/// Find the value addressed by `key`, or `None` if no reading of the key
/// resolves.
///
/// # Examples
///
/// ```
/// use keypath_core::find;
/// use serde_json::json;
///
/// let tree = json!({"a": {"b": {"c": 5}}});
/// assert_eq!(find(&tree, "a.b.c"), Some(&json!(5)));
/// assert_eq!(find(&tree, "a.b.c.d"), None);
/// ```
pub fn find<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    let segments = split_key(key);
    find_segments(tree, &segments)
}

fn find_segments<'a>(node: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    let map = node.as_object()?;

    for split in KeySplits::new(segments) {
        let Some(value) = map.get(&split.prefix) else {
            trace!(prefix = %split.prefix, "candidate key absent");
            continue;
        };

        if split.is_terminal() {
            trace!(prefix = %split.prefix, "literal key resolved");
            return Some(value);
        }

        // Only mappings can be traversed further
        if value.is_object()
            && let Some(found) = find_segments(value, split.suffix)
        {
            return Some(found);
        }

        trace!(
            prefix = %split.prefix,
            suffix = %split.suffix_key(),
            "literal key matched but remainder did not resolve"
        );
    }

    None
}

/// Resolve `key` with an optional default.
///
/// `default` of `None` means the caller supplied no default; in that case an
/// exhausted search fails with [`Error::KeyNotFound`]. Any `Some` value,
/// including `null`, is returned as-is on a miss.
///
/// # Examples
///
/// ```
/// use keypath_core::lookup;
/// use serde_json::{json, Value};
///
/// let tree = json!({});
/// assert_eq!(lookup(&tree, "x", Some(&Value::Null)).unwrap(), &Value::Null);
/// assert!(lookup(&tree, "x", None).is_err());
/// ```
pub fn lookup<'a>(tree: &'a Value, key: &str, default: Option<&'a Value>) -> Result<&'a Value> {
    if let Some(value) = find(tree, key) {
        return Ok(value);
    }

    match default {
        Some(default) => {
            debug!(key, "key not found, using default");
            Ok(default)
        }
        None => {
            debug!(key, "key not found");
            Err(Error::key_not_found(key, tree))
        }
    }
}

/// Resolve `key`, failing with [`Error::KeyNotFound`] if it does not exist.
pub fn resolve<'a>(tree: &'a Value, key: &str) -> Result<&'a Value> {
    lookup(tree, key, None)
}

/// Resolve `key`, returning `default` if it does not exist.
pub fn resolve_or<'a>(tree: &'a Value, key: &str, default: &'a Value) -> &'a Value {
    find(tree, key).unwrap_or_else(|| {
        debug!(key, "key not found, using default");
        default
    })
}

/// Whether any reading of `key` resolves in `tree`.
pub fn contains(tree: &Value, key: &str) -> bool {
    find(tree, key).is_some()
}

/// Resolve `key` and deserialize the value into `T`.
///
/// # Examples
///
/// ```
/// use keypath_core::resolve_as;
/// use serde_json::json;
///
/// let tree = json!({"server": {"port": 8080}});
/// let port: u16 = resolve_as(&tree, "server.port").unwrap();
/// assert_eq!(port, 8080);
/// ```
pub fn resolve_as<T: DeserializeOwned>(tree: &Value, key: &str) -> Result<T> {
    let value = resolve(tree, key)?;
    T::deserialize(value).map_err(|e| Error::type_mismatch(key, e))
}

/// Resolve `key` and deserialize it into `T`, returning `default` if the key
/// does not exist.
///
/// A value that exists but has the wrong shape is still an error.
pub fn resolve_as_or<T: DeserializeOwned>(tree: &Value, key: &str, default: T) -> Result<T> {
    match find(tree, key) {
        Some(value) => T::deserialize(value).map_err(|e| Error::type_mismatch(key, e)),
        None => {
            debug!(key, "key not found, using default");
            Ok(default)
        }
    }
}
