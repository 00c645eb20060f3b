//! Action file discovery
//!
//! Finds the `action.yml`/`action.yaml` next to the current directory, or
//! every such file under a root for the recursive modes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

const ACTION_FILE_NAMES: &[&str] = &["action.yml", "action.yaml"];

/// Directories never descended into during recursive discovery.
const SKIPPED_DIRS: &[&str] = &["node_modules", "vendor", "target"];

/// Look for `action.yml` (preferred) or `action.yaml` in `dir`.
pub fn find_action_file(dir: &Path) -> Result<PathBuf> {
    for name in ACTION_FILE_NAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(CliError::user(
        "neither action.yml nor action.yaml found in current directory",
    ))
}

/// Recursively collect every action metadata file under `root`, skipping
/// hidden directories and dependency trees. Results are in lexical order.
pub fn find_all_action_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, &mut found)?;
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if path.is_dir() {
            if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
                tracing::debug!(path = %path.display(), "skipping directory");
                continue;
            }
            walk(&path, found)?;
        } else if ACTION_FILE_NAMES.contains(&name.as_ref()) {
            found.push(path);
        }
    }
    Ok(())
}
