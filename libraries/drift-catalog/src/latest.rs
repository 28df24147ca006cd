//! Latest-request tracking
//!
//! Refreshes can overlap (rapid genre switches, pull to refresh). The UI
//! applies only the newest request's result; anything older is discarded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter for in-flight refreshes
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: AtomicU64,
}

impl RequestTracker {
    /// Create a tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request, superseding all earlier ones
    ///
    /// Returns the token to check when the request resolves.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the given token still belongs to the newest request
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }
}
