//! Crate-level error type for loading inputs and running the CLI.
//!
//! Scheduling itself reports [`Infeasible`] directly; this type wraps it
//! alongside I/O and parsing failures for callers that mix both.

use std::path::PathBuf;

use thiserror::Error;

use crate::scheduler::Infeasible;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported input format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid input: {}", join_messages(.errors))]
    InvalidInput { errors: Vec<ValidationError> },

    #[error(transparent)]
    Infeasible(#[from] Infeasible),
}

pub type Result<T> = std::result::Result<T, Error>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::InvalidInput { errors }
    }
}
