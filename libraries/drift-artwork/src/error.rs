//! Artwork error types

use thiserror::Error;

/// Errors from artwork fetching
#[derive(Debug, Error)]
pub enum ArtworkError {
    /// URL is not fetchable
    #[error("invalid artwork URL: {0}")]
    InvalidUrl(String),

    /// Transport failure
    #[error("artwork request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status from the image host
    #[error("artwork fetch returned status {0}")]
    ServerError(u16),

    /// Image exceeds the single-entry size limit
    #[error("artwork too large: {0} bytes (max {1} bytes)")]
    TooLarge(usize, usize),
}

/// Result type for artwork operations
pub type Result<T> = std::result::Result<T, ArtworkError>;
