//! The Document model
//!
//! A document is an ordered sequence of text lines plus its backing path.
//! Managed sections are located by line-scoped marker matching; everything
//! outside the managed sections passes through byte-for-byte.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use readme_action::Action;

use crate::diff::{self, DiffResult};
use crate::error::Result;
use crate::marker;
use crate::table;
use crate::usage::{self, EnvLookup};

/// Scaffold written when no document exists yet.
const SCAFFOLD: &[&str] = &[
    "# <!--name--><!--/name-->",
    "<!--description-->",
    "## Inputs",
    "<!--inputs-->",
    "## Outputs",
    "<!--outputs-->",
    "## Usage",
    r#"<!--usage action="your/action" version="v1"-->"#,
    "```yaml",
    "on: push",
    "steps:",
    "  - uses: your/action@v1",
    "```",
    "<!--/usage-->",
];

/// A markdown document with managed, marker-delimited sections.
///
/// Cloning deep-duplicates the line sequence; callers snapshot the prior
/// state with [`Clone`] before mutating, then compare with [`Document::diff`].
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    pub(crate) lines: Vec<String>,
}

impl Document {
    /// Read an existing document. Splits on `\n` without normalizing
    /// carriage returns; a missing file surfaces as [`crate::Error::Io`].
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        Ok(Self {
            path,
            lines: content.split('\n').map(String::from).collect(),
        })
    }

    /// Read an existing document, or synthesize the default scaffold and
    /// write it to disk when the file does not exist.
    pub fn load_or_create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match Self::load(path.clone()) {
            Ok(doc) => Ok(doc),
            Err(crate::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "creating document from scaffold");
                let doc = Self::scaffold(path);
                doc.write()?;
                Ok(doc)
            }
            Err(e) => Err(e),
        }
    }

    /// The default scaffold, not yet persisted.
    pub fn scaffold(path: impl Into<PathBuf>) -> Self {
        Self::from_lines(path, SCAFFOLD.iter().map(|l| l.to_string()).collect())
    }

    /// A document with no content, standing in for a missing file.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::from_lines(path, Vec::new())
    }

    /// Build a document from lines already in memory.
    pub fn from_lines(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the first line matching the section's start marker.
    pub fn find_section_start(&self, name: &str) -> Option<usize> {
        let re = marker::start_pattern(name);
        self.lines.iter().position(|line| re.is_match(line))
    }

    /// Index of the first line matching the section's end marker.
    pub fn find_section_end(&self, name: &str) -> Option<usize> {
        let re = marker::end_pattern(name);
        self.lines.iter().position(|line| re.is_match(line))
    }

    /// Bring the four managed sections and the usage block up to date from
    /// the action record.
    ///
    /// Sections whose start marker is absent are silently skipped. Only the
    /// usage step can fail; earlier section rewrites remain applied to the
    /// in-memory document, so callers must not persist after an error.
    pub fn update(&mut self, action: &Action, env: &dyn EnvLookup) -> Result<()> {
        self.replace_section("name", &action.name);
        self.replace_section("description", &action.description);
        self.replace_section("inputs", &table::render(&action.inputs_matrix()));
        self.replace_section("outputs", &table::render(&action.outputs_matrix()));
        usage::update_usage(self, env)
    }

    /// Replace the interior of a managed section with fresh content.
    pub fn replace_section(&mut self, name: &str, content: &str) {
        self.clear_section(name);
        self.insert_section(name, content);
    }

    /// Insert content into a section that is currently empty.
    ///
    /// When the start and end markers share a line the interior between
    /// them is replaced in place and no lines are added. Otherwise the
    /// trimmed content and a fresh bare end marker are inserted right
    /// after the start-marker line.
    pub fn insert_section(&mut self, name: &str, content: &str) {
        let Some(start) = self.find_section_start(name) else {
            return;
        };
        let end = self.find_section_end(name);

        if end == Some(start) {
            let rewritten = insert_between_markers(&self.lines[start], name, content.trim());
            self.lines[start] = rewritten;
            return;
        }

        let mut inserted: Vec<String> =
            content.trim().split('\n').map(String::from).collect();
        inserted.push(marker::end_marker(name));
        self.lines.splice(start + 1..start + 1, inserted);
    }

    /// Remove everything from just after the start marker through the end
    /// marker itself, leaving only the start-marker line. A missing end
    /// marker is a no-op.
    pub fn clear_section(&mut self, name: &str) {
        let Some(end) = self.find_section_end(name) else {
            return;
        };
        let Some(start) = self.find_section_start(name) else {
            return;
        };
        if end > start {
            self.lines.drain(start + 1..=end);
        }
    }

    /// Compute the character-level diff from this document to `other`.
    pub fn diff(&self, other: &Document) -> DiffResult {
        diff::diff(&self.to_string(), &other.to_string())
    }

    /// Persist to the backing path, creating or truncating as needed.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, self.to_string())?;
        Ok(())
    }
}

/// Documents compare by serialized content, not by path.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Document {}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Replace the text between a start and end marker that share a line.
fn insert_between_markers(line: &str, name: &str, insertion: &str) -> String {
    let start_re = marker::start_pattern(name);
    let end_re = marker::end_pattern(name);
    let Some(start) = start_re.find(line) else {
        return line.to_string();
    };
    let Some(end) = end_re.find(line) else {
        return line.to_string();
    };
    format!("{}{}{}", &line[..start.end()], insertion, &line[end.start()..])
}
