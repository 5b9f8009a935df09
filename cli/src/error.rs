//! Error types for the command-line front end.

use std::path::PathBuf;

use flagline_core::{ParseError, RegistrationError};
use thiserror::Error;

/// Errors reported by `flagline` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Registry file could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Registry content is well-formed but unusable.
    #[error("invalid registry: {0}")]
    InvalidRegistry(String),

    /// A command in the registry file was rejected.
    #[error("invalid registry: {0}")]
    Registration(#[from] RegistrationError),

    /// The argument list did not parse. Carries the help text to show.
    #[error("{error}\n\n{documentation}")]
    Parse {
        error: ParseError,
        documentation: String,
    },
}

/// Convenience alias for results with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
