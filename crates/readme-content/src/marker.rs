//! Marker grammar for managed sections
//!
//! A managed section is delimited by paired HTML comments. The start marker
//! may carry `key="value"` attributes; the end marker is always bare. Marker
//! matching is line-scoped: a marker must be fully contained within one line
//! to be recognized.

use regex::Regex;

use crate::error::{Error, Result};

/// Regex matching the start marker of a section, e.g. `<!--inputs-->` or
/// `<!-- usage action="org/act" version="v1" -->`.
pub fn start_pattern(name: &str) -> Regex {
    let pattern = format!(r#"<!--\s*{}(\s+\w+="\S+")*\s*-->"#, regex::escape(name));
    Regex::new(&pattern).expect("marker pattern is valid")
}

/// Regex matching the end marker of a section, e.g. `<!--/inputs-->` or
/// `<!-- / inputs -->`.
pub fn end_pattern(name: &str) -> Regex {
    let pattern = format!(r"<!--\s*/\s*{}\s*-->", regex::escape(name));
    Regex::new(&pattern).expect("marker pattern is valid")
}

/// A freshly generated, bare end marker line for the given section.
pub fn end_marker(name: &str) -> String {
    format!("<!--/{name}-->")
}

/// Extract a `key="value"` attribute from a start-marker line.
pub fn attribute(line: &str, key: &str) -> Result<String> {
    let pattern = format!(r#"<!--.*{}="(\S*)".*-->"#, regex::escape(key));
    let re = Regex::new(&pattern).expect("attribute pattern is valid");
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::missing_attribute(key))
}
