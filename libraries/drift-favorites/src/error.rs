//! Favorites error types

use thiserror::Error;

/// Errors from the favorites store
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Persistence failure
    #[error("favorites storage error: {0}")]
    Storage(#[from] drift_core::CoreError),
}

/// Result type for favorites operations
pub type Result<T> = std::result::Result<T, FavoritesError>;
