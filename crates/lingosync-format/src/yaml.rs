//! YAML format adapter
//!
//! Parses through `serde_json::Value` so the nested expand/flatten logic is
//! shared with the JSON adapter. `serde_yaml` always emits two-space
//! indentation; the configured indent width only affects JSON.

use lingosync_core::domain::LanguageMap;
use serde_json::{Map, Value};

use crate::nested::{collect_flat, expand, flatten, kind_name};
use crate::{FormatError, Formatter};

/// YAML adapter with configurable nesting
#[derive(Debug, Clone)]
pub struct YamlFormatter {
    nested: bool,
}

impl YamlFormatter {
    pub fn new(nested: bool) -> Self {
        Self { nested }
    }
}

impl Formatter for YamlFormatter {
    fn parse(&self, content: &str) -> Result<LanguageMap, FormatError> {
        // An empty document is an empty mapping, not an error; the remote
        // can legitimately report a language with no keys yet.
        if content.trim().is_empty() {
            return Ok(LanguageMap::new());
        }

        let value: Value =
            serde_yaml::from_str(content).map_err(|e| FormatError::Parse(e.to_string()))?;

        let tree = match value {
            Value::Object(map) => map,
            other => return Err(FormatError::NotAnObject(kind_name(&other))),
        };

        if self.nested {
            flatten(&tree)
        } else {
            collect_flat(&tree)
        }
    }

    fn format(&self, mapping: &LanguageMap) -> Result<String, FormatError> {
        let tree: Map<String, Value> = if self.nested {
            expand(mapping)?
        } else {
            mapping
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect()
        };

        serde_yaml::to_string(&Value::Object(tree)).map_err(|e| FormatError::Parse(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "yaml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, &str)]) -> LanguageMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_flat_round_trip() {
        let f = YamlFormatter::new(false);
        let m = mapping(&[("button.save", "Save"), ("title", "App")]);
        assert_eq!(f.parse(&f.format(&m).unwrap()).unwrap(), m);
    }

    #[test]
    fn test_nested_round_trip() {
        let f = YamlFormatter::new(true);
        let m = mapping(&[("auth.login.title", "Sign in"), ("auth.logout", "Sign out")]);
        assert_eq!(f.parse(&f.format(&m).unwrap()).unwrap(), m);
    }

    #[test]
    fn test_nested_output_shape() {
        let f = YamlFormatter::new(true);
        let out = f.format(&mapping(&[("a.b", "x")])).unwrap();
        assert_eq!(out, "a:\n  b: x\n");
    }

    #[test]
    fn test_output_is_deterministic() {
        let f = YamlFormatter::new(true);
        let m = mapping(&[("z.a", "1"), ("a.z", "2")]);
        assert_eq!(f.format(&m).unwrap(), f.format(&m).unwrap());
    }

    #[test]
    fn test_empty_document_is_empty_mapping() {
        let f = YamlFormatter::new(false);
        assert!(f.parse("").unwrap().is_empty());
        assert!(f.parse("   \n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input_is_a_parse_error() {
        let f = YamlFormatter::new(false);
        assert!(matches!(
            f.parse("key: [unclosed"),
            Err(FormatError::Parse(_))
        ));
    }

    #[test]
    fn test_non_string_leaf_rejected() {
        let f = YamlFormatter::new(true);
        let err = f.parse("retries: 3\n").unwrap_err();
        assert!(matches!(err, FormatError::NonStringValue { .. }));
    }

    #[test]
    fn test_values_needing_quotes_round_trip() {
        let f = YamlFormatter::new(false);
        let m = mapping(&[
            ("colon", "a: b"),
            ("number-ish", "42"),
            ("multiline", "first\nsecond"),
        ]);
        assert_eq!(f.parse(&f.format(&m).unwrap()).unwrap(), m);
    }
}
