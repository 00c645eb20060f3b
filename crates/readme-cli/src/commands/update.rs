//! Update command: bring READMEs in sync with their action metadata

use std::path::Path;

use colored::Colorize;

use readme_content::{Document, ProcessEnv};

use crate::discover;
use crate::error::{CliError, Result};

use super::{print_header, print_summary};

/// Run the update command from `dir`.
pub fn run_update(dir: &Path, readme_filename: &str, recursive: bool) -> Result<()> {
    if recursive {
        run_update_recursive(dir, readme_filename)
    } else {
        run_update_single(dir, readme_filename)
    }
}

fn run_update_single(dir: &Path, readme_filename: &str) -> Result<()> {
    let action_path = discover::find_action_file(dir)?;
    let readme_path = dir.join(readme_filename);
    let updated = update_one(&action_path, &readme_path)?;
    if updated {
        println!("{} Updated: {}", "✓".green(), readme_path.display());
    }
    Ok(())
}

fn run_update_recursive(dir: &Path, readme_filename: &str) -> Result<()> {
    let action_files = discover::find_all_action_files(dir)?;
    if action_files.is_empty() {
        return Err(CliError::user("no action.yml or action.yaml files found"));
    }

    print_header(action_files.len());

    let mut updated = 0;
    let mut unchanged = 0;

    for action_path in &action_files {
        let readme_path = action_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(readme_filename);
        let was_updated = update_one(action_path, &readme_path).map_err(|e| {
            CliError::user(format!("error updating {}: {e}", readme_path.display()))
        })?;
        if was_updated {
            println!("{} Updated: {}", "✓".green(), readme_path.display());
            updated += 1;
        } else {
            println!("{} Unchanged: {}", "○".yellow(), readme_path.display());
            unchanged += 1;
        }
    }

    print_summary(
        updated.to_string().green(),
        "updated",
        unchanged.to_string().yellow(),
        "unchanged",
    );
    Ok(())
}

/// Update a single README from its action file. Returns whether the file
/// changed on disk.
fn update_one(action_path: &Path, readme_path: &Path) -> Result<bool> {
    tracing::debug!(
        action = %action_path.display(),
        readme = %readme_path.display(),
        "updating"
    );
    let action = readme_action::parse_file(action_path)?;
    let mut doc = Document::load_or_create(readme_path)?;
    let before = doc.clone();
    doc.update(&action, &ProcessEnv)?;

    if doc == before {
        return Ok(false);
    }
    doc.write()?;
    Ok(true)
}
