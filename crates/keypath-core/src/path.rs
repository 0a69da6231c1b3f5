//! Key splitting utilities
//!
//! A dotted key such as `a.b.c` can be read several ways against a tree:
//! as the literal key `"a.b.c"`, as `"a.b"` followed by `c`, or as `a`
//! followed by `b.c`. This module enumerates those readings in the order the
//! resolver tries them: longest literal prefix first.
//!
//! # Examples
//!
//! ```
//! use keypath_core::path::{split_key, KeySplits};
//!
//! let segments = split_key("a.b.c");
//! let prefixes: Vec<String> = KeySplits::new(&segments).map(|s| s.prefix).collect();
//! assert_eq!(prefixes, vec!["a.b.c", "a.b", "a"]);
//! ```

/// Split a dotted key into its segments.
///
/// Empty segments are kept, so `""` yields one empty segment and `"a..b"`
/// yields `["a", "", "b"]`.
///
/// # Examples
///
/// ```
/// use keypath_core::path::split_key;
///
/// assert_eq!(split_key("files.exclude"), vec!["files", "exclude"]);
/// assert_eq!(split_key("name"), vec!["name"]);
/// ```
pub fn split_key(key: &str) -> Vec<&str> {
    key.split('.').collect()
}

/// One reading of a dotted key: a literal prefix to look up directly, and the
/// segments left over for a nested lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySplit<'s, 'a> {
    /// Leading segments re-joined with `.`
    pub prefix: String,
    /// Segments not covered by `prefix`
    pub suffix: &'s [&'a str],
}

impl KeySplit<'_, '_> {
    /// True when the prefix covers the whole key.
    pub fn is_terminal(&self) -> bool {
        self.suffix.is_empty()
    }

    /// The leftover segments re-joined with `.`.
    pub fn suffix_key(&self) -> String {
        self.suffix.join(".")
    }
}

/// Iterator over every [`KeySplit`] of a key, longest prefix first.
///
/// Yields exactly one split per segment; the last split has a single-segment
/// prefix.
#[derive(Debug, Clone)]
pub struct KeySplits<'s, 'a> {
    segments: &'s [&'a str],
    split: usize,
}

impl<'s, 'a> KeySplits<'s, 'a> {
    pub fn new(segments: &'s [&'a str]) -> Self {
        Self {
            segments,
            split: segments.len(),
        }
    }
}

impl<'s, 'a> Iterator for KeySplits<'s, 'a> {
    type Item = KeySplit<'s, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.split == 0 {
            return None;
        }
        let (prefix, suffix) = self.segments.split_at(self.split);
        self.split -= 1;
        Some(KeySplit {
            prefix: prefix.join("."),
            suffix,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.split, Some(self.split))
    }
}

impl ExactSizeIterator for KeySplits<'_, '_> {}
