//! Typed arguments for the file commands.
//!
//! One argument bag is shared by every command in the demo queue; each
//! command picks the fields it needs through its own argument struct.

use crate::command::{CreateFileArgs, RenameFileArgs};
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandArgs {
    pub src: PathBuf,
    pub dest: PathBuf,
}

impl CommandArgs {
    pub fn new(src: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
        }
    }

    /// Parse arguments from a TOML document with `src` and `dest` keys.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn create_args(&self) -> CreateFileArgs {
        CreateFileArgs {
            path: self.src.clone(),
        }
    }

    pub fn rename_args(&self) -> RenameFileArgs {
        RenameFileArgs {
            src: self.src.clone(),
            dest: self.dest.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_from_toml() {
        let args = CommandArgs::from_toml_str(
            r#"
            src = "test.txt"
            dest = "renamed.txt"
            "#,
        )
        .unwrap();
        assert_eq!(args, CommandArgs::new("test.txt", "renamed.txt"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = CommandArgs::from_toml_str(r#"src = "test.txt""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_create_uses_src_path() {
        let args = CommandArgs::new("a.txt", "b.txt");
        assert_eq!(args.create_args().path, PathBuf::from("a.txt"));
    }

    #[test]
    fn test_rename_uses_both_paths() {
        let args = CommandArgs::new("a.txt", "b.txt");
        let rename = args.rename_args();
        assert_eq!(rename.src, PathBuf::from("a.txt"));
        assert_eq!(rename.dest, PathBuf::from("b.txt"));
    }
}
