//! action-readme CLI
//!
//! Generates or updates GitHub Actions documentation from action metadata.

mod cli;
mod commands;
mod discover;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Update { readme, recursive } => {
            commands::run_update(&cwd, &readme, recursive)
        }
        Commands::Diff { readme, recursive } => commands::run_diff(&cwd, &readme, recursive),
        Commands::Init {
            readme,
            template,
            recursive,
        } => commands::run_init(&cwd, &readme, &template, recursive),
        Commands::PreCommit { env, files } => commands::run_precommit(&env, &files),
    }
}
