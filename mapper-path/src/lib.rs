#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use core::fmt;
use core::str::Split;

use serde_json::Value;

mod candidates;
pub use candidates::KeyPaths;

/// Separator between the segments of a [`KeyPath`].
pub const SEPARATOR: char = '.';

/// A dotted path through nested JSON objects, such as `user.address.city`.
///
/// The empty path denotes the value the path is resolved against, so it
/// always resolves and is never "missing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath<'a> {
    raw: &'a str,
}

impl<'a> KeyPath<'a> {
    /// Wrap a dotted path string.
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The empty path.
    pub const fn root() -> Self {
        Self { raw: "" }
    }

    /// The path exactly as it was given.
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Check if this is the empty path.
    pub const fn is_root(&self) -> bool {
        self.raw.is_empty()
    }

    /// Iterate over the object keys this path walks through, outermost first.
    ///
    /// The root path has no segments. Empty segments (as in `a..b`) are kept
    /// and looked up literally as the empty key.
    pub fn segments(&self) -> Segments<'a> {
        Segments {
            inner: (!self.is_root()).then(|| self.raw.split(SEPARATOR)),
        }
    }

    /// Number of segments in this path.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Walk `root` along this path.
    ///
    /// Returns `None` as soon as a segment is missing or the value reached so
    /// far is not an object. Traversal never fails in any other way; deciding
    /// whether absence is an error is up to the caller.
    pub fn resolve<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        let mut current = root;
        for segment in self.segments() {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl<'a> From<&'a str> for KeyPath<'a> {
    fn from(raw: &'a str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("<root>")
        } else {
            f.write_str(self.raw)
        }
    }
}

/// Iterator over the segments of a [`KeyPath`], see [`KeyPath::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: Option<Split<'a, char>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

/// Resolve a dotted `path` against `root`.
///
/// Shorthand for `KeyPath::new(path).resolve(root)`.
pub fn resolve<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    KeyPath::new(path).resolve(root)
}
