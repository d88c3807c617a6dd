//! Match patterns for asset rules and cache groups.
//!
//! Patterns are compiled once; equality and serialization use the source
//! text, so resolved profiles compare and print the way they were declared.

use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

/// A compiled match pattern that serializes back to its source text.
///
/// Equality compares the source so resolved profiles stay comparable.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile one of the crate's own literal patterns.
    ///
    /// Only called from the `LazyLock` tables; every literal is covered by
    /// `builtin_patterns_compile` in the catalog and optimization tests.
    pub(crate) fn builtin(source: &'static str) -> Self {
        Self(Regex::new(source).unwrap())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
