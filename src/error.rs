//! Error types for pdp-extract.
//!
//! Extraction itself never fails: missing page structure is absorbed by the
//! safe-access layer and surfaces only through `ProductRecord::success`.
//! These errors belong to the crate's edges (reading input, serializing output).

/// Error type for I/O and serialization around extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the page failed.
    #[error("Failed to read page: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a record failed.
    #[error("Failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    /// No page URL was supplied.
    #[error("Missing page URL")]
    MissingUrl,
}

/// Result type alias for pdp-extract operations.
pub type Result<T> = std::result::Result<T, Error>;
