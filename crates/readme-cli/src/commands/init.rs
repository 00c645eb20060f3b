//! Init command: create READMEs from an embedded template

use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::discover;
use crate::error::{CliError, Result};

use super::{print_header, print_summary};

/// The embedded default template.
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default.md");

/// Run the init command from `dir`.
pub fn run_init(dir: &Path, readme_filename: &str, template: &str, recursive: bool) -> Result<()> {
    if recursive {
        run_init_recursive(dir, readme_filename, template)
    } else {
        run_init_single(dir, readme_filename, template)
    }
}

fn run_init_single(dir: &Path, readme_filename: &str, template: &str) -> Result<()> {
    let readme_path = dir.join(readme_filename);
    if readme_path.exists() {
        return Err(CliError::user(format!(
            "{} already exists",
            readme_path.display()
        )));
    }
    fs::write(&readme_path, template_content(template)?)?;
    println!("{} Created: {}", "✓".green(), readme_path.display());
    Ok(())
}

fn run_init_recursive(dir: &Path, readme_filename: &str, template: &str) -> Result<()> {
    let action_files = discover::find_all_action_files(dir)?;
    if action_files.is_empty() {
        return Err(CliError::user("no action.yml or action.yaml files found"));
    }

    print_header(action_files.len());

    let mut created = 0;
    let mut skipped = 0;

    for action_path in &action_files {
        let readme_path = action_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(readme_filename);
        if readme_path.exists() {
            println!(
                "{} Skipped: {} (already exists)",
                "○".yellow(),
                readme_path.display()
            );
            skipped += 1;
            continue;
        }
        fs::write(&readme_path, template_content(template)?).map_err(|e| {
            CliError::user(format!("error creating {}: {e}", readme_path.display()))
        })?;
        println!("{} Created: {}", "✓".green(), readme_path.display());
        created += 1;
    }

    print_summary(
        created.to_string().green(),
        "created",
        skipped.to_string().yellow(),
        "skipped",
    );
    Ok(())
}

fn template_content(template: &str) -> Result<&'static str> {
    match template {
        "default" => Ok(DEFAULT_TEMPLATE),
        other => Err(CliError::user(format!("unknown template: {other}"))),
    }
}
