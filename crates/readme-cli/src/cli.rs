//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Generate or update GitHub Actions documentation
#[derive(Parser, Debug)]
#[command(name = "action-readme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Update README.md from action.yml
    Update {
        /// README file name
        #[arg(long, default_value = "README.md")]
        readme: String,

        /// Search recursively for all action.yml/action.yaml files
        #[arg(short, long)]
        recursive: bool,
    },

    /// Show what an update would change, exiting non-zero when stale
    Diff {
        /// README file name
        #[arg(long, default_value = "README.md")]
        readme: String,

        /// Search recursively for all action.yml/action.yaml files
        #[arg(short, long)]
        recursive: bool,
    },

    /// Initialize README.md from a template
    Init {
        /// README file name
        #[arg(long, default_value = "README.md")]
        readme: String,

        /// Template to initialize from
        #[arg(long, default_value = "default")]
        template: String,

        /// Create a README.md next to every discovered action.yml/action.yaml
        #[arg(short, long)]
        recursive: bool,
    },

    /// Pre-commit hook: update READMEs next to staged action files
    #[command(name = "pre-commit", hide = true)]
    PreCommit {
        /// Environment overrides in the form key=value
        #[arg(long = "env")]
        env: Vec<String>,

        /// Staged file paths
        files: Vec<String>,
    },
}
