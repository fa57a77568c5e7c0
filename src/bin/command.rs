//! Command demo: create and rename a file, then undo both in reverse.
//!
//! Run with: cargo run --bin command

use anyhow::{ensure, Context, Result};
use colored::Colorize;
use design_patterns::command::{CommandQueue, CreateFileCommand, RenameFileCommand};
use design_patterns::config::CommandArgs;
use design_patterns::logging;

// One argument bag shared by every command in the queue.
const ARGS: &str = r#"
src = "test.txt"
dest = "renamed.txt"
"#;

fn main() -> Result<()> {
    logging::init();
    println!("{}", "=== Command ===".bold());

    let args = CommandArgs::from_toml_str(ARGS).context("invalid built-in command arguments")?;

    let mut queue = CommandQueue::new();
    queue.push(Box::new(CreateFileCommand::new(args.create_args())));
    queue.push(Box::new(RenameFileCommand::new(args.rename_args())));

    queue.execute_all().context("failed to execute commands")?;
    println!("Executed {} commands", queue.len());
    ensure!(!args.src.exists(), "{} should have been renamed", args.src.display());
    ensure!(args.dest.exists(), "{} should exist", args.dest.display());

    queue.undo_all().context("failed to undo commands")?;
    println!("Undid {} commands in reverse order", queue.len());
    ensure!(!args.src.exists(), "{} should have been removed", args.src.display());
    ensure!(!args.dest.exists(), "{} should have been renamed back", args.dest.display());

    println!("{}", "File system restored".green());
    Ok(())
}
