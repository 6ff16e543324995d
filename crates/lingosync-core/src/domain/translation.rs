//! Translation sets and comparison value types
//!
//! A [`TranslationSet`] is the in-memory unit exchanged between the local
//! file tree, the remote store, and the diff engine: language → combined key
//! → value. `BTreeMap` backing keeps iteration language-major and key-sorted,
//! which makes every downstream report and file write reproducible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single language's combined-key → value mapping
pub type LanguageMap = BTreeMap<String, String>;

/// In-memory translation data for any number of languages
///
/// Both the local file tree and the remote store materialize into this same
/// shape, making the two sides directly comparable. A set is built fresh for
/// each command invocation; nothing is cached across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationSet {
    languages: BTreeMap<String, LanguageMap>,
}

impl TranslationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single translation, creating the language on demand.
    pub fn insert(&mut self, language: &str, key: impl Into<String>, value: impl Into<String>) {
        self.languages
            .entry(language.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Look up one value.
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// The mapping for one language, if present.
    pub fn language(&self, language: &str) -> Option<&LanguageMap> {
        self.languages.get(language)
    }

    /// Replace (or create) an entire language mapping.
    pub fn set_language(&mut self, language: &str, map: LanguageMap) {
        self.languages.insert(language.to_string(), map);
    }

    /// Merge entries into one language, overwriting existing keys.
    pub fn merge_language(&mut self, language: &str, entries: impl IntoIterator<Item = (String, String)>) {
        let map = self.languages.entry(language.to_string()).or_default();
        for (k, v) in entries {
            map.insert(k, v);
        }
    }

    /// Language codes present in the set, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Iterate over `(language, mapping)` pairs, sorted by language.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageMap)> {
        self.languages.iter().map(|(l, m)| (l.as_str(), m))
    }

    /// True when no language holds any key.
    pub fn is_empty(&self) -> bool {
        self.languages.values().all(BTreeMap::is_empty)
    }

    /// Total number of keys across all languages.
    pub fn total_keys(&self) -> usize {
        self.languages.values().map(BTreeMap::len).sum()
    }
}

impl FromIterator<(String, LanguageMap)> for TranslationSet {
    fn from_iter<T: IntoIterator<Item = (String, LanguageMap)>>(iter: T) -> Self {
        Self {
            languages: iter.into_iter().collect(),
        }
    }
}

/// A single translation fact present on only one side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Language code (e.g. `en`, `de`)
    pub language: String,
    /// Combined key (`namespace:key` or bare `key`)
    pub key: String,
    /// The translation value
    pub value: String,
}

/// A key present in both sets with differing values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    /// Language code
    pub language: String,
    /// Combined key
    pub key: String,
    /// The value on the local side
    pub local_value: String,
    /// The value on the remote side
    pub remote_value: String,
}

/// Classification of the differences between a local and a remote set
///
/// Keys identical on both sides (including both empty) are omitted entirely;
/// they require no action. The three vectors are language-major, key-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Keys present only in the local set
    pub local_only: Vec<Entry>,
    /// Keys present only in the remote set
    pub remote_only: Vec<Entry>,
    /// Keys present in both sets with differing values
    pub conflicts: Vec<ConflictEntry>,
}

impl DiffResult {
    /// True when nothing differs between the two sides.
    pub fn is_empty(&self) -> bool {
        self.local_only.is_empty() && self.remote_only.is_empty() && self.conflicts.is_empty()
    }
}

/// The outcome of conflict resolution
///
/// Every conflict ends up in exactly one bucket; none may be dropped or
/// duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPartition {
    /// Conflicts where the local value wins
    pub use_local: Vec<ConflictEntry>,
    /// Conflicts where the remote value wins
    pub use_remote: Vec<ConflictEntry>,
}

impl ResolvedPartition {
    /// Total number of resolved conflicts.
    pub fn len(&self) -> usize {
        self.use_local.len() + self.use_remote.len()
    }

    /// True when no conflicts were resolved (i.e. none existed).
    pub fn is_empty(&self) -> bool {
        self.use_local.is_empty() && self.use_remote.is_empty()
    }
}
