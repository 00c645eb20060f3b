//! YAML parser for action metadata
//!
//! Parsing happens in two passes over the same byte stream: an untyped
//! [`serde_yaml::Value`] pass that captures the declaration order of the
//! `inputs` and `outputs` mappings, which a typed map would lose, followed
//! by a typed serde pass for the record itself.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::action::Action;
use crate::error::{Error, Result};

/// Parse an action metadata file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Action> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "parsing action metadata");
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// Parse action metadata from a YAML string.
///
/// Ordering extraction runs first so a non-mapping `inputs`/`outputs`
/// node reports as [`Error::ExpectedMapping`] rather than a generic
/// deserialization failure.
pub fn parse_str(text: &str) -> Result<Action> {
    let root: Value = serde_yaml::from_str(text)?;
    let inputs_order = ordered_keys(&root, "inputs")?;
    let outputs_order = ordered_keys(&root, "outputs")?;
    let mut action: Action = serde_yaml::from_str(text)?;
    action.inputs_order = inputs_order;
    action.outputs_order = outputs_order;
    Ok(action)
}

/// Collect the keys of a top-level mapping in document order. A missing or
/// null node yields an empty list; any other non-mapping node is malformed.
fn ordered_keys(root: &Value, field: &str) -> Result<Vec<String>> {
    match root.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Mapping(map)) => Ok(map
            .keys()
            .filter_map(|key| key.as_str().map(String::from))
            .collect()),
        Some(_) => Err(Error::expected_mapping(field)),
    }
}
