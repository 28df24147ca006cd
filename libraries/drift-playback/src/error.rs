//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Queue is empty
    #[error("Queue is empty")]
    QueueEmpty,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Stream locator could not be used
    #[error("Invalid stream URL: {0}")]
    InvalidStreamUrl(String),

    /// Renderer reported a failure
    #[error("Renderer error: {0}")]
    Renderer(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
