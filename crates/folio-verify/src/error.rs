//! Verifier error types.
//!
//! Only structural problems are errors. Failed checks are data and end up in
//! the report.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// The build output directory does not exist. Nothing else is checked.
    #[error("build output directory not found: {0}")]
    DistNotFound(PathBuf),

    /// Walking the build output failed.
    #[error("failed to walk build output: {0}")]
    Walk(#[from] ignore::Error),

    /// Reading a file from the build output failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VerifyError {
    /// Stable machine-readable code printed in the error report.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DistNotFound(_) => "dist_not_found",
            Self::Walk(_) => "walk_failed",
            Self::Io { .. } => "io_error",
        }
    }
}
