//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// The file passed with `--config` does not exist.
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A field parsed but holds an unusable value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
