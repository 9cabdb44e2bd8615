//! Common functionality shared across commands

use std::path::{Path, PathBuf};

use clap::Args;

use crate::constants::input::JSON_EXTENSION;
use crate::error::JsonGraphError;

/// Input arguments shared by all commands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON graph descriptions to read (glob patterns are expanded)
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,
}

impl InputArgs {
    /// Expand glob patterns into paths.
    ///
    /// A directory stands for the `.json` files directly inside it. A
    /// pattern that matches nothing is kept as a literal path so the import
    /// step reports the missing file.
    pub fn resolve_paths(&self) -> Result<Vec<PathBuf>, JsonGraphError> {
        let mut paths = Vec::new();

        for input in &self.inputs {
            let pattern = if Path::new(input).is_dir() {
                format!("{}/*.{JSON_EXTENSION}", input.trim_end_matches('/'))
            } else {
                input.clone()
            };

            let matches = glob::glob(&pattern).map_err(|e| JsonGraphError::ConfigurationError {
                message: format!("Invalid input pattern '{input}': {e}"),
            })?;

            let mut matched = matches.filter_map(Result::ok).peekable();
            if matched.peek().is_none() {
                paths.push(PathBuf::from(input));
            } else {
                paths.extend(matched);
            }
        }

        Ok(paths)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, JsonGraphError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, JsonGraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::JsonGraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> JsonGraphError {
    JsonGraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_paths_expands_globs() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("b.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("c.txt"), "").unwrap();

        let args = InputArgs {
            inputs: vec![format!("{}/*.json", temp_dir.path().display())],
        };

        let mut paths = args.resolve_paths().unwrap();
        paths.sort();
        assert_eq!(
            paths,
            vec![temp_dir.path().join("a.json"), temp_dir.path().join("b.json")]
        );
    }

    #[test]
    fn test_resolve_paths_expands_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("graph.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.md"), "").unwrap();

        let args = InputArgs {
            inputs: vec![temp_dir.path().display().to_string()],
        };

        assert_eq!(
            args.resolve_paths().unwrap(),
            vec![temp_dir.path().join("graph.json")]
        );
    }

    #[test]
    fn test_resolve_paths_keeps_unmatched_literal() {
        let args = InputArgs {
            inputs: vec!["missing-graph.json".to_string()],
        };

        assert_eq!(
            args.resolve_paths().unwrap(),
            vec![PathBuf::from("missing-graph.json")]
        );
    }

    #[test]
    fn test_resolve_paths_rejects_bad_pattern() {
        let args = InputArgs {
            inputs: vec!["[".to_string()],
        };

        assert!(matches!(
            args.resolve_paths(),
            Err(JsonGraphError::ConfigurationError { .. })
        ));
    }
}
