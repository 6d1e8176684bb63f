//! Errors for the shared types. Each crate above this one has its own error
//! enum; `folio-cli` folds them all into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A value could not be used as the site base URL.
    #[error("invalid site URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
