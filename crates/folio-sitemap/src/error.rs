//! Sitemap generation error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop sitemap generation. Remote and catalog failures are not
/// among them; those degrade to fewer entries.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Creating the output directory or writing a file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
