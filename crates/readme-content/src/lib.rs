//! Markdown section-update engine for action-readme
//!
//! Owns a document as an ordered sequence of lines, locates named regions
//! delimited by paired HTML-comment markers, rewrites their interiors from
//! an action-description record, and diffs the result against the prior
//! state. Everything outside the managed regions passes through untouched.

pub mod diff;
pub mod document;
pub mod error;
pub mod marker;
pub mod table;
pub mod toc;
pub mod usage;

pub use diff::DiffResult;
pub use document::Document;
pub use error::{Error, Result};
pub use usage::{EnvLookup, ProcessEnv};
