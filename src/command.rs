//! Pattern: Command (a.k.a. Action, Transaction)
//! Category: Behavioral
//!
//! File operations are wrapped in objects that know how to perform
//! themselves and how to take themselves back. A queue runs them in order
//! and undoes them in reverse order.

use crate::error::CommandError;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing::debug;

/// A reversible operation.
///
/// `execute` may succeed at most once, and `undo` is only valid after a
/// successful `execute`.
pub trait Command {
    fn execute(&mut self) -> Result<(), CommandError>;
    fn undo(&mut self) -> Result<(), CommandError>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFileArgs {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameFileArgs {
    pub src: PathBuf,
    pub dest: PathBuf,
}

/// Creates an empty file, and removes it again on undo.
#[derive(Debug)]
pub struct CreateFileCommand {
    path: PathBuf,
    executed: bool,
}

impl CreateFileCommand {
    pub fn new(args: CreateFileArgs) -> Self {
        Self {
            path: args.path,
            executed: false,
        }
    }

    pub fn is_executed(&self) -> bool {
        self.executed
    }
}

impl Command for CreateFileCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        if self.executed {
            return Err(CommandError::AlreadyExecuted(self.describe()));
        }
        // Existing contents are left alone, like `touch`.
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CommandError::io("create", &self.path, e))?;
        self.executed = true;
        debug!(path = %self.path.display(), "created file");
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        if !self.executed {
            return Err(CommandError::NotExecuted(self.describe()));
        }
        fs::remove_file(&self.path).map_err(|e| CommandError::io("remove", &self.path, e))?;
        self.executed = false;
        debug!(path = %self.path.display(), "removed file");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("create {}", self.path.display())
    }
}

/// Renames `src` to `dest`, and back on undo.
#[derive(Debug)]
pub struct RenameFileCommand {
    src: PathBuf,
    dest: PathBuf,
    executed: bool,
}

impl RenameFileCommand {
    pub fn new(args: RenameFileArgs) -> Self {
        Self {
            src: args.src,
            dest: args.dest,
            executed: false,
        }
    }

    pub fn is_executed(&self) -> bool {
        self.executed
    }
}

impl Command for RenameFileCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        if self.executed {
            return Err(CommandError::AlreadyExecuted(self.describe()));
        }
        fs::rename(&self.src, &self.dest).map_err(|e| CommandError::io("rename", &self.src, e))?;
        self.executed = true;
        debug!(src = %self.src.display(), dest = %self.dest.display(), "renamed file");
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        if !self.executed {
            return Err(CommandError::NotExecuted(self.describe()));
        }
        fs::rename(&self.dest, &self.src).map_err(|e| CommandError::io("rename", &self.dest, e))?;
        self.executed = false;
        debug!(src = %self.dest.display(), dest = %self.src.display(), "renamed file back");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("rename {} -> {}", self.src.display(), self.dest.display())
    }
}

/// An ordered list of commands.
#[derive(Default)]
pub struct CommandQueue {
    commands: Vec<Box<dyn Command>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Execute every command in insertion order. Stops at the first failure.
    pub fn execute_all(&mut self) -> Result<(), CommandError> {
        for command in self.commands.iter_mut() {
            debug!(command = %command.describe(), "execute");
            command.execute()?;
        }
        Ok(())
    }

    /// Undo every command in reverse insertion order. Stops at the first failure.
    pub fn undo_all(&mut self) -> Result<(), CommandError> {
        for command in self.commands.iter_mut().rev() {
            debug!(command = %command.describe(), "undo");
            command.undo()?;
        }
        Ok(())
    }
}

impl FromIterator<Box<dyn Command>> for CommandQueue {
    fn from_iter<I: IntoIterator<Item = Box<dyn Command>>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
