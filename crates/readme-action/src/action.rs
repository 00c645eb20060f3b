//! The decoded action-description record
//!
//! Mirrors the GitHub Actions metadata syntax:
//! <https://docs.github.com/en/actions/creating-actions/metadata-syntax-for-github-actions>

use std::collections::HashMap;

use serde::Deserialize;

/// Declared inputs, keyed by input name.
pub type Inputs = HashMap<String, Input>;

/// Declared outputs, keyed by output name.
pub type Outputs = HashMap<String, Output>;

/// An action's declared metadata plus the declaration order of its
/// input/output mappings.
///
/// The order lists exist because typed map deserialization does not
/// preserve YAML document order; they are attached by the parser after
/// the typed pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub inputs: Inputs,
    #[serde(skip)]
    pub inputs_order: Vec<String>,
    #[serde(default)]
    pub outputs: Outputs,
    #[serde(skip)]
    pub outputs_order: Vec<String>,
}

/// A single declared input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: String,
}

/// A single declared output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub description: String,
}

impl Action {
    /// Build the inputs table matrix: header row plus one row per input in
    /// declaration order.
    pub fn inputs_matrix(&self) -> Vec<Vec<String>> {
        let mut matrix = Vec::new();
        matrix.push(vec![
            "Name".to_string(),
            "Description".to_string(),
            "Required".to_string(),
            "Default".to_string(),
        ]);
        for key in self.input_keys() {
            let Some(input) = self.inputs.get(&key) else {
                continue;
            };
            matrix.push(vec![
                code_block(&key),
                input.description.clone(),
                code_block(if input.required { "true" } else { "false" }),
                code_block(&input.default),
            ]);
        }
        matrix
    }

    /// Build the outputs table matrix: header row plus one row per output
    /// in declaration order.
    pub fn outputs_matrix(&self) -> Vec<Vec<String>> {
        let mut matrix = Vec::new();
        matrix.push(vec!["Name".to_string(), "Description".to_string()]);
        for key in self.output_keys() {
            let Some(output) = self.outputs.get(&key) else {
                continue;
            };
            matrix.push(vec![code_block(&key), output.description.clone()]);
        }
        matrix
    }

    fn input_keys(&self) -> Vec<String> {
        if self.inputs_order.is_empty() {
            self.inputs.keys().cloned().collect()
        } else {
            self.inputs_order.clone()
        }
    }

    fn output_keys(&self) -> Vec<String> {
        if self.outputs_order.is_empty() {
            self.outputs.keys().cloned().collect()
        } else {
            self.outputs_order.clone()
        }
    }
}

/// Wrap a value in backticks for table cells. A whitespace-only value
/// becomes a backtick-quoted single space so the cell stays visible
/// instead of collapsing to empty backticks.
fn code_block(code: &str) -> String {
    if code.trim().is_empty() {
        "` `".to_string()
    } else {
        format!("`{code}`")
    }
}
