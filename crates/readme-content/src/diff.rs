//! Character-level document diffing
//!
//! Produces an annotated display form of the difference between two
//! serialized documents: insertions wrapped in green ANSI styling,
//! deletions in red, unchanged runs verbatim.

use similar::{ChangeTag, TextDiff};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Result of comparing two documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    /// Annotated text with insertions and deletions visually marked.
    pub pretty: String,
    /// True whenever any insertion or deletion exists.
    pub has_diff: bool,
}

/// Compute a character-level diff from `old` to `new`.
pub fn diff(old: &str, new: &str) -> DiffResult {
    let text_diff = TextDiff::from_chars(old, new);
    let mut pretty = String::new();
    let mut has_diff = false;
    let mut run = String::new();
    let mut run_tag = ChangeTag::Equal;

    let flush = |run: &mut String, tag: ChangeTag, pretty: &mut String| {
        if run.is_empty() {
            return;
        }
        match tag {
            ChangeTag::Equal => pretty.push_str(run),
            ChangeTag::Delete => {
                pretty.push_str(RED);
                pretty.push_str(run);
                pretty.push_str(RESET);
            }
            ChangeTag::Insert => {
                pretty.push_str(GREEN);
                pretty.push_str(run);
                pretty.push_str(RESET);
            }
        }
        run.clear();
    };

    for change in text_diff.iter_all_changes() {
        let tag = change.tag();
        if tag != run_tag {
            flush(&mut run, run_tag, &mut pretty);
            run_tag = tag;
        }
        if tag != ChangeTag::Equal {
            has_diff = true;
        }
        run.push_str(change.value());
    }
    flush(&mut run, run_tag, &mut pretty);

    DiffResult { pretty, has_diff }
}
