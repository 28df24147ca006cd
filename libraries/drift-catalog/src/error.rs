//! Catalog client error types

use thiserror::Error;

/// Errors from the catalog client
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or unsupported base URL
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded its deadline
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Non-success status from the server
    #[error("server error {status}: {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Body or reason text
        message: String,
    },

    /// Malformed response body
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
