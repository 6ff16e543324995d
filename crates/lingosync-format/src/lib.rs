//! Lingosync Format - Translation file format adapters
//!
//! Converts between a language's combined-key → value mapping and a file's
//! textual content. Provides:
//! - JSON and YAML adapters behind the [`Formatter`] trait
//! - Flat vs. nested key representation (`a.b.c` as an object path)
//! - Deterministic output so unchanged data rewrites byte-identically
//! - The `{lang}` file-name pattern used to discover and name files

mod json;
mod nested;
mod pattern;
mod yaml;

use lingosync_core::config::FormatKind;
use lingosync_core::domain::LanguageMap;
use thiserror::Error;

pub use json::JsonFormatter;
pub use pattern::FilePattern;
pub use yaml::YamlFormatter;

/// Errors raised while parsing or serializing translation files
#[derive(Debug, Error)]
pub enum FormatError {
    /// Malformed JSON/YAML syntax
    #[error("malformed content: {0}")]
    Parse(String),

    /// The document's top level is not a key/value mapping
    #[error("top level must be an object, found {0}")]
    NotAnObject(&'static str),

    /// A leaf holds something other than a string
    #[error("value at '{path}' is {kind}, expected a string")]
    NonStringValue { path: String, kind: &'static str },

    /// A nested path runs through an existing scalar value
    #[error("key '{requested}' collides with existing non-object value at '{existing}'")]
    KeyCollision { existing: String, requested: String },

    /// Invalid `{lang}` file pattern
    #[error("invalid file pattern '{0}': must contain '{{lang}}' exactly once")]
    Pattern(String),
}

/// Converts between a language mapping and a file's textual content
///
/// `parse(format(m)) == m` for every mapping `m`; output is deterministic
/// (stable key ordering, fixed indentation) so repeated writes of unchanged
/// data are byte-identical.
pub trait Formatter: Send + Sync {
    /// Deserialize file content into a flat combined-key mapping.
    ///
    /// Fails on malformed syntax or non-string leaves; never returns a
    /// partially-parsed mapping.
    fn parse(&self, content: &str) -> Result<LanguageMap, FormatError>;

    /// Serialize a flat mapping to file content.
    fn format(&self, mapping: &LanguageMap) -> Result<String, FormatError>;

    /// File suffix associated with the format (without the dot).
    fn extension(&self) -> &'static str;
}

/// Construct the formatter for a resolved format/nesting/indent combination.
pub fn formatter_for(kind: FormatKind, nested: bool, indent: usize) -> Box<dyn Formatter> {
    match kind {
        FormatKind::Json => Box::new(JsonFormatter::new(nested, indent)),
        FormatKind::Yaml => Box::new(YamlFormatter::new(nested)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_for_extension() {
        assert_eq!(formatter_for(FormatKind::Json, false, 2).extension(), "json");
        assert_eq!(formatter_for(FormatKind::Yaml, true, 2).extension(), "yaml");
    }
}
