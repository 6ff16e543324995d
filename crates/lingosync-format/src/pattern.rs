//! `{lang}` file-name pattern
//!
//! Translation files are named from a pattern containing a `{lang}`
//! placeholder (e.g. `{lang}.json`). The pattern both synthesizes file
//! names for writing and recognizes/decodes them during discovery.

use glob::Pattern;

use crate::FormatError;

/// A validated file-name pattern with exactly one `{lang}` placeholder
#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    prefix: String,
    suffix: String,
    matcher: Pattern,
}

impl FilePattern {
    /// Validate and compile a pattern.
    pub fn new(raw: &str) -> Result<Self, FormatError> {
        if raw.matches("{lang}").count() != 1 {
            return Err(FormatError::Pattern(raw.to_string()));
        }
        let (prefix, suffix) = raw
            .split_once("{lang}")
            .ok_or_else(|| FormatError::Pattern(raw.to_string()))?;

        let glob_source = format!("{}*{}", Pattern::escape(prefix), Pattern::escape(suffix));
        let matcher =
            Pattern::new(&glob_source).map_err(|_| FormatError::Pattern(raw.to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            matcher,
        })
    }

    /// The pattern as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute a language code into the pattern.
    pub fn file_name(&self, lang: &str) -> String {
        format!("{}{}{}", self.prefix, lang, self.suffix)
    }

    /// Recover the language code from a file name produced by this pattern.
    ///
    /// Returns `None` for names that don't match or would yield an empty
    /// language code.
    pub fn extract_lang<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if !self.matcher.matches(file_name) {
            return None;
        }
        let lang = file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        (!lang.is_empty()).then_some(lang)
    }
}
