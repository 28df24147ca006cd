//! Player events
//!
//! Pull-based UI synchronization: the controller accumulates events and the
//! host drains them with [`crate::PlayerController::take_events`]. No
//! framework-level reactivity is assumed.

use crate::types::{PlayerState, RepeatMode};
use drift_core::types::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Transport state changed
    StateChanged {
        /// The new state
        state: PlayerState,
    },

    /// The current track changed
    TrackChanged {
        /// ID of the new current track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Position report (forwarded from the renderer)
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration (0 for live streams)
        duration_ms: u64,
    },

    /// Queue contents or order changed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        muted: bool,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// Whether shuffle is now enabled
        enabled: bool,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },

    /// A non-fatal playback error occurred
    Error {
        /// Error message
        message: String,
    },
}
