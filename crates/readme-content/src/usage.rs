//! Usage-block rewriting
//!
//! The `usage` section is rewritten in place rather than replaced: versioned
//! `uses: <path>@<ref>` references between the markers get their `@<ref>`
//! suffix updated to the version declared on the start marker, scoped by a
//! glob over the reference path.

use std::collections::HashMap;
use std::sync::LazyLock;

use glob::{MatchOptions, Pattern};
use regex::Regex;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::marker;

static VERSIONED_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"uses:\s*(\S+)@\S+").expect("reference pattern is valid"));

/// Injected environment access, so `env:`-indirected version resolution
/// stays testable and free of hidden global state.
pub trait EnvLookup {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Rewrite versioned references inside the `usage` section.
///
/// A missing start marker is a no-op. A start marker without an end marker
/// is an error, as are missing `version`/`action` attributes and an unset
/// `env:`-indirected variable.
pub fn update_usage(doc: &mut Document, env: &dyn EnvLookup) -> Result<()> {
    let Some(start) = doc.find_section_start("usage") else {
        return Ok(());
    };
    let Some(end) = doc.find_section_end("usage") else {
        return Err(Error::missing_end_marker("usage"));
    };

    let marker_line = &doc.lines[start];
    let version = marker::attribute(marker_line, "version")?;
    let version = resolve_version(&version, env)?;
    let action_glob = marker::attribute(marker_line, "action")?;
    let pattern = Pattern::new(&action_glob).map_err(|e| Error::InvalidGlob {
        pattern: action_glob.clone(),
        message: e.to_string(),
    })?;
    // Shell-style scoping: `*` must not cross path segments, `**` may.
    let options = MatchOptions {
        require_literal_separator: true,
        ..Default::default()
    };

    let interior = start + 1..end.max(start + 1);
    for line in &mut doc.lines[interior] {
        let Some(caps) = VERSIONED_REFERENCE.captures(line) else {
            continue;
        };
        let path = caps[1].to_string();
        if pattern.matches_with(&path, options) {
            let reference = Regex::new(&format!(r"{}@\S+", regex::escape(&path)))
                .expect("reference pattern is valid");
            *line = reference
                .replace_all(line, format!("{path}@{version}"))
                .into_owned();
        }
    }
    Ok(())
}

/// Resolve a version expression: `env:NAME` looks up the variable `NAME`
/// through the injected environment; anything else is a literal.
fn resolve_version(version: &str, env: &dyn EnvLookup) -> Result<String> {
    match version.strip_prefix("env:") {
        Some(name) => match env.var(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::EnvVarNotSet {
                name: name.to_string(),
            }),
        },
        None => Ok(version.to_string()),
    }
}
