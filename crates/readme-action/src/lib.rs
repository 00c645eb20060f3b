//! Action metadata record and YAML parser for action-readme
//!
//! Decodes an `action.yml`/`action.yaml` metadata file into an [`Action`]
//! record: name, author, description, typed inputs/outputs, and the
//! declaration order of the input/output mappings.

pub mod action;
pub mod error;
pub mod parser;

pub use action::{Action, Input, Inputs, Output, Outputs};
pub use error::{Error, Result};
pub use parser::{parse_file, parse_str};
