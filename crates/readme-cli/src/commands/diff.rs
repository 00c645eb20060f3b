//! Diff command: report what an update would change

use std::io::ErrorKind;
use std::path::Path;

use colored::Colorize;

use readme_content::{Document, Error as ContentError, ProcessEnv};

use crate::discover;
use crate::error::{CliError, Result};

use super::{print_header, print_summary};

/// Run the diff command from `dir`. Returns an error (and so a non-zero
/// exit) when any README is out of date.
pub fn run_diff(dir: &Path, readme_filename: &str, recursive: bool) -> Result<()> {
    if recursive {
        run_diff_recursive(dir, readme_filename)
    } else {
        run_diff_single(dir, readme_filename)
    }
}

fn run_diff_single(dir: &Path, readme_filename: &str) -> Result<()> {
    let action_path = discover::find_action_file(dir)?;
    let readme_path = dir.join(readme_filename);

    let has_diff = diff_one(&action_path, &readme_path)?;
    if has_diff {
        return Err(CliError::user(format!(
            "{} is not up-to-date",
            readme_path.display()
        )));
    }
    println!("{} {} is up-to-date", "✓".green(), readme_path.display());
    Ok(())
}

fn run_diff_recursive(dir: &Path, readme_filename: &str) -> Result<()> {
    let action_files = discover::find_all_action_files(dir)?;
    if action_files.is_empty() {
        return Err(CliError::user("no action.yml or action.yaml files found"));
    }

    print_header(action_files.len());

    let mut up_to_date = 0;
    let mut out_of_date = 0;

    for action_path in &action_files {
        let readme_path = action_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(readme_filename);
        let has_diff = diff_one(action_path, &readme_path).map_err(|e| {
            CliError::user(format!("error diffing {}: {e}", readme_path.display()))
        })?;
        if has_diff {
            out_of_date += 1;
        } else {
            println!("{} {}", "✓".green(), readme_path.display());
            up_to_date += 1;
        }
    }

    print_summary(
        up_to_date.to_string().green(),
        "up-to-date",
        out_of_date.to_string().red(),
        "out-of-date",
    );

    if out_of_date > 0 {
        return Err(CliError::user("documentation is not up-to-date"));
    }
    Ok(())
}

/// Diff one README against what an update would produce, printing the
/// annotated diff when they differ.
fn diff_one(action_path: &Path, readme_path: &Path) -> Result<bool> {
    let action = readme_action::parse_file(action_path)?;

    // A missing README compares as an empty document against the filled-in
    // scaffold; nothing is written to disk while diffing.
    let (current, mut expected) = match Document::load(readme_path) {
        Ok(doc) => (doc.clone(), doc),
        Err(ContentError::Io(e)) if e.kind() == ErrorKind::NotFound => (
            Document::empty(readme_path),
            Document::scaffold(readme_path),
        ),
        Err(e) => return Err(e.into()),
    };
    expected.update(&action, &ProcessEnv)?;

    let diff = current.diff(&expected);
    if diff.has_diff {
        println!("{} {}", "✗".red(), readme_path.display());
        println!();
        println!("{}", diff.pretty);
        println!();
    }
    Ok(diff.has_diff)
}
