//! Focus timer error types

use thiserror::Error;

/// Errors from the focus timer
#[derive(Debug, Error)]
pub enum FocusError {
    /// A timer is already running or paused
    #[error("a focus timer is already active")]
    AlreadyActive,

    /// No active timer for the requested operation
    #[error("no active focus timer")]
    NotActive,

    /// Operation invalid in the current timer state
    #[error("invalid timer state: expected {expected}, was {actual}")]
    InvalidState {
        /// State the operation requires
        expected: &'static str,
        /// State the timer was in
        actual: &'static str,
    },

    /// Timer duration out of range
    #[error("invalid timer duration: {0}")]
    InvalidDuration(String),

    /// Session log persistence failure
    #[error("session log error: {0}")]
    SessionLog(#[from] drift_core::CoreError),
}

/// Result type for focus timer operations
pub type Result<T> = std::result::Result<T, FocusError>;
