use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a reversible file command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("command already executed: {0}")]
    AlreadyExecuted(String),

    #[error("cannot undo a command that was not executed: {0}")]
    NotExecuted(String),
}

impl CommandError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ObserverError {
    #[error("subscriber is not registered with this subject")]
    NotSubscribed,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse command arguments: {0}")]
    Parse(#[from] toml::de::Error),
}
