//! Flat ↔ nested key conversion
//!
//! In nested mode `a.b.c` addresses an object path rather than a literal key
//! containing dots. Both directions work over `serde_json::Value` trees; the
//! YAML adapter reuses them since YAML mappings deserialize into the same
//! shape.

use lingosync_core::domain::LanguageMap;
use serde_json::{Map, Value};

use crate::FormatError;

/// Expand a flat dotted-key mapping into a nested object tree.
///
/// A path segment that runs through an existing scalar (e.g. `a` is already
/// a string when `a.b` arrives) is a [`FormatError::KeyCollision`]; nothing
/// is overwritten silently.
pub(crate) fn expand(flat: &LanguageMap) -> Result<Map<String, Value>, FormatError> {
    let mut root = Map::new();

    for (key, value) in flat {
        let segments: Vec<&str> = key.split('.').collect();
        insert_path(&mut root, key, &segments, value)?;
    }

    Ok(root)
}

fn insert_path(
    node: &mut Map<String, Value>,
    full_key: &str,
    segments: &[&str],
    value: &str,
) -> Result<(), FormatError> {
    let (head, rest) = match segments.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };

    if rest.is_empty() {
        match node.get(*head) {
            // A subtree already claimed this segment (`a.b` exists, `a` arrives).
            Some(Value::Object(_)) => {
                return Err(FormatError::KeyCollision {
                    existing: full_key.to_string(),
                    requested: full_key.to_string(),
                })
            }
            _ => {
                node.insert(head.to_string(), Value::String(value.to_string()));
                return Ok(());
            }
        }
    }

    let child = node
        .entry(head.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    match child {
        Value::Object(map) => insert_path(map, full_key, rest, value),
        _ => Err(FormatError::KeyCollision {
            existing: prefix_of(full_key, full_key.split('.').count() - rest.len()),
            requested: full_key.to_string(),
        }),
    }
}

/// The dotted prefix of `full_key` covering its first `depth` segments.
fn prefix_of(full_key: &str, depth: usize) -> String {
    full_key
        .split('.')
        .take(depth)
        .collect::<Vec<_>>()
        .join(".")
}

/// Flatten a nested object tree into a dotted-key mapping.
///
/// Every leaf must be a string; anything else fails with the offending path
/// so no key is silently dropped.
pub(crate) fn flatten(tree: &Map<String, Value>) -> Result<LanguageMap, FormatError> {
    let mut flat = LanguageMap::new();
    flatten_into(tree, "", &mut flat)?;
    Ok(flat)
}

fn flatten_into(
    node: &Map<String, Value>,
    prefix: &str,
    out: &mut LanguageMap,
) -> Result<(), FormatError> {
    for (key, value) in node {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::String(s) => {
                out.insert(path, s.clone());
            }
            Value::Object(map) => flatten_into(map, &path, out)?,
            other => {
                return Err(FormatError::NonStringValue {
                    path,
                    kind: kind_name(other),
                })
            }
        }
    }
    Ok(())
}

/// Collect a flat mapping from a top-level object without expanding paths.
///
/// Used by flat mode, where dots are literal key characters.
pub(crate) fn collect_flat(tree: &Map<String, Value>) -> Result<LanguageMap, FormatError> {
    let mut flat = LanguageMap::new();
    for (key, value) in tree {
        match value {
            Value::String(s) => {
                flat.insert(key.clone(), s.clone());
            }
            other => {
                return Err(FormatError::NonStringValue {
                    path: key.clone(),
                    kind: kind_name(other),
                })
            }
        }
    }
    Ok(flat)
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
