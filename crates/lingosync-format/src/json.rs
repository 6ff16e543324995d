//! JSON format adapter
//!
//! Deterministic output: keys arrive pre-sorted from the `BTreeMap`, the
//! indent width is fixed per configuration, and the file ends with a single
//! trailing newline. Unchanged data therefore rewrites byte-identically,
//! which keeps translation files diff-friendly in version control.

use lingosync_core::domain::LanguageMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::nested::{collect_flat, expand, flatten};
use crate::{FormatError, Formatter};

/// JSON adapter with configurable nesting and indent width
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    nested: bool,
    indent: usize,
}

impl JsonFormatter {
    pub fn new(nested: bool, indent: usize) -> Self {
        Self { nested, indent }
    }

    fn to_tree(&self, mapping: &LanguageMap) -> Result<Map<String, Value>, FormatError> {
        if self.nested {
            expand(mapping)
        } else {
            Ok(mapping
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect())
        }
    }
}

impl Formatter for JsonFormatter {
    fn parse(&self, content: &str) -> Result<LanguageMap, FormatError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| FormatError::Parse(e.to_string()))?;

        let tree = match value {
            Value::Object(map) => map,
            other => return Err(FormatError::NotAnObject(crate::nested::kind_name(&other))),
        };

        if self.nested {
            flatten(&tree)
        } else {
            collect_flat(&tree)
        }
    }

    fn format(&self, mapping: &LanguageMap) -> Result<String, FormatError> {
        let tree = self.to_tree(mapping)?;

        let indent = vec![b' '; self.indent];
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        Value::Object(tree)
            .serialize(&mut serializer)
            .map_err(|e| FormatError::Parse(e.to_string()))?;
        out.push(b'\n');

        String::from_utf8(out).map_err(|e| FormatError::Parse(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
