//! Pre-commit command: update READMEs next to staged action files
//!
//! Invoked by a pre-commit hook with the staged file paths as arguments.
//! Environment overrides come in as `--env key=value` pairs and shadow the
//! process environment during version resolution, so hooks can pin
//! `env:`-indirected versions without mutating global state.

use std::collections::HashMap;
use std::path::Path;

use readme_content::{Document, EnvLookup, ProcessEnv};

use crate::error::{CliError, Result};

/// Process environment with explicit overrides layered on top.
struct OverlayEnv {
    overrides: HashMap<String, String>,
    fallback: ProcessEnv,
}

impl EnvLookup for OverlayEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.overrides
            .get(name)
            .cloned()
            .or_else(|| self.fallback.var(name))
    }
}

/// Run the pre-commit command over the staged `files`.
pub fn run_precommit(env_pairs: &[String], files: &[String]) -> Result<()> {
    let env = OverlayEnv {
        overrides: parse_env_pairs(env_pairs)?,
        fallback: ProcessEnv,
    };

    for file in files {
        let dir = Path::new(file).parent().unwrap_or(Path::new("."));
        let action_path = dir.join("action.yml");
        let readme_path = dir.join("README.md");
        if !action_path.is_file() {
            continue;
        }

        let action = readme_action::parse_file(&action_path)?;
        let mut doc = Document::load_or_create(&readme_path)?;
        let before = doc.clone();
        doc.update(&action, &env)?;

        if doc != before {
            doc.write()?;
            println!("{}", doc.path().display());
        }
    }
    Ok(())
}

fn parse_env_pairs(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut overrides = HashMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CliError::user("invalid env format. should be key=value"));
        };
        overrides.insert(key.to_string(), value.to_string());
    }
    Ok(overrides)
}
