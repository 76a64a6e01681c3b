//! Ordered regex sets with an explicit evaluation mode
//!
//! Tag detection and duration detection both walk an ordered list of
//! patterns, but with opposite rules: tags take the union of every match of
//! every pattern, durations stop at the first pattern that yields a usable
//! value. [`MatchMode`] makes that choice part of the set instead of the
//! caller's loop.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// How a [`PatternSet`] is evaluated against a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Patterns in order; the first match of the first pattern that yields a
    /// value wins. A pattern whose first match yields nothing is skipped.
    FirstMatch,
    /// Every match of every pattern contributes, in pattern order.
    UnionAll,
}

calhours_domain::impl_domain_enum_conversions!(MatchMode {
    FirstMatch => "first_match",
    UnionAll => "union_all",
});

/// A compiled pattern plus a caller-defined payload describing how to read
/// its captures.
#[derive(Debug, Clone)]
pub struct CompiledPattern<K> {
    regex: Regex,
    kind: K,
}

impl<K> CompiledPattern<K> {
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    #[must_use]
    pub fn kind(&self) -> &K {
        &self.kind
    }
}

/// Ordered, immutable set of compiled patterns.
#[derive(Debug, Clone)]
pub struct PatternSet<K> {
    patterns: Vec<CompiledPattern<K>>,
    mode: MatchMode,
}

impl<K> PatternSet<K> {
    #[must_use]
    pub fn new(mode: MatchMode) -> Self {
        Self { patterns: Vec::new(), mode }
    }

    /// Append a pattern; evaluation order is insertion order.
    #[must_use]
    pub fn with_pattern(mut self, regex: Regex, kind: K) -> Self {
        self.patterns.push(CompiledPattern { regex, kind });
        self
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern<K>> {
        self.patterns.iter()
    }

    /// Evaluate the set against `text` according to its mode.
    ///
    /// `read` turns one match into a value, or `None` when the captures are
    /// unusable. In [`MatchMode::FirstMatch`] the result holds at most one
    /// value.
    pub fn evaluate<'t, T, F>(&self, text: &'t str, mut read: F) -> Vec<T>
    where
        F: FnMut(&K, &Captures<'t>) -> Option<T>,
    {
        match self.mode {
            MatchMode::FirstMatch => self
                .patterns
                .iter()
                .find_map(|p| p.regex.captures(text).and_then(|caps| read(&p.kind, &caps)))
                .into_iter()
                .collect(),
            MatchMode::UnionAll => self
                .patterns
                .iter()
                .flat_map(|p| p.regex.captures_iter(text).map(move |caps| (&p.kind, caps)))
                .filter_map(|(kind, caps)| read(kind, &caps))
                .collect(),
        }
    }
}
