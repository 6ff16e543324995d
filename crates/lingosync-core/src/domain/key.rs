//! Combined-key addressing
//!
//! Translation keys are addressed as `namespace:key` when a namespace is
//! present and as a bare `key` otherwise. The namespace decides which file a
//! key lives in; the key itself may contain further `.`-separated segments
//! that the format layer expands in nested mode.
//!
//! ## Design Decisions
//!
//! - Only the FIRST colon separates namespace from key, so keys may contain
//!   colons but namespaces may not.
//! - A leading colon (empty namespace part) is treated as no namespace at
//!   all; the whole string stays the key. This keeps `parse` total and the
//!   `parse(combined(ns, k)) == (ns, k)` round trip lossless.

use serde::{Deserialize, Serialize};

/// The decomposition of a combined key for file-path purposes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespacedKey {
    /// Grouping prefix, `None` for keys in the root translation file
    pub namespace: Option<String>,
    /// The key within the namespace (may contain `.` and `:`)
    pub key: String,
}

impl NamespacedKey {
    /// Create a namespaced key from its parts.
    pub fn new(namespace: Option<String>, key: impl Into<String>) -> Self {
        Self {
            namespace,
            key: key.into(),
        }
    }

    /// Split a combined key on its first colon.
    ///
    /// `"common:button.save"` → namespace `common`, key `button.save`.
    /// `"title"` → no namespace. `":title"` → no namespace (empty namespace
    /// parts are not meaningful).
    pub fn parse(combined: &str) -> Self {
        match combined.split_once(':') {
            Some((ns, key)) if !ns.is_empty() => Self {
                namespace: Some(ns.to_string()),
                key: key.to_string(),
            },
            _ => Self {
                namespace: None,
                key: combined.to_string(),
            },
        }
    }

    /// Reassemble the combined form, omitting the prefix when there is no
    /// namespace. Inverse of [`NamespacedKey::parse`].
    pub fn combined(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}:{}", ns, self.key),
            None => self.key.clone(),
        }
    }
}

impl std::fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.combined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_namespace() {
        let nk = NamespacedKey::parse("common:button.save");
        assert_eq!(nk.namespace.as_deref(), Some("common"));
        assert_eq!(nk.key, "button.save");
    }

    #[test]
    fn test_parse_without_namespace() {
        let nk = NamespacedKey::parse("button.save");
        assert_eq!(nk.namespace, None);
        assert_eq!(nk.key, "button.save");
    }

    #[test]
    fn test_only_first_colon_separates() {
        let nk = NamespacedKey::parse("errors:http:404");
        assert_eq!(nk.namespace.as_deref(), Some("errors"));
        assert_eq!(nk.key, "http:404");
    }

    #[test]
    fn test_leading_colon_is_not_a_namespace() {
        let nk = NamespacedKey::parse(":title");
        assert_eq!(nk.namespace, None);
        assert_eq!(nk.key, ":title");
    }

    #[test]
    fn test_round_trip_with_namespace() {
        let nk = NamespacedKey::new(Some("common".to_string()), "button.save");
        assert_eq!(NamespacedKey::parse(&nk.combined()), nk);
    }

    #[test]
    fn test_round_trip_without_namespace() {
        let nk = NamespacedKey::new(None, "greeting");
        assert_eq!(nk.combined(), "greeting");
        assert_eq!(NamespacedKey::parse(&nk.combined()), nk);
    }

    #[test]
    fn test_round_trip_key_containing_colon() {
        let nk = NamespacedKey::new(Some("errors".to_string()), "http:500");
        assert_eq!(nk.combined(), "errors:http:500");
        assert_eq!(NamespacedKey::parse(&nk.combined()), nk);
    }

    #[test]
    fn test_display_matches_combined() {
        let nk = NamespacedKey::new(Some("auth".to_string()), "login.title");
        assert_eq!(nk.to_string(), "auth:login.title");
    }
}
