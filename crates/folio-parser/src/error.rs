//! Parser error types for folio-parser.

/// Errors that can occur while reading content catalogs.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("{format} catalog is malformed: {message}")]
    Format {
        format: &'static str,
        message: String,
    },

    #[error("Unexpected catalog shape: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
