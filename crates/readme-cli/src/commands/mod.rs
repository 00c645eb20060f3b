//! Command implementations

mod diff;
mod init;
mod precommit;
mod update;

pub use diff::run_diff;
pub use init::run_init;
pub use precommit::run_precommit;
pub use update::run_update;

use colored::{ColoredString, Colorize};

/// Print the cyan discovery header for recursive runs.
fn print_header(count: usize) {
    println!("{}", format!("Found {count} action file(s)").cyan());
    println!();
}

/// Print the closing summary line, e.g. `Summary: 5 updated, 3 unchanged`.
fn print_summary(count1: ColoredString, label1: &str, count2: ColoredString, label2: &str) {
    println!();
    println!(
        "{} {} {}, {} {}",
        "Summary:".cyan(),
        count1,
        label1,
        count2,
        label2
    );
}
