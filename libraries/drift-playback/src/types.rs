//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport state
///
/// Exactly one state is active at a time. Transitions are driven only by
/// controller methods or renderer callbacks; `Errored` is recoverable only
/// via a fresh load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// No track loaded
    Idle,

    /// Waiting for the renderer to accept a stream
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Playback halted, track and queue position retained
    Stopped,

    /// Renderer failed to load or play the current track
    Errored(String),
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    Off,

    /// Loop the entire queue
    All,

    /// Loop the current track only
    One,
}

impl RepeatMode {
    /// Next mode in the user-facing cycle: Off -> All -> One -> Off
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Configuration for the player controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 0.8)
    pub volume: f32,

    /// Default skip interval for skip forward/backward (default: 15 s)
    pub skip_seconds: u64,

    /// `previous()` restarts the current track past this elapsed time
    /// (default: 3 s)
    pub restart_threshold: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 0.8,
            skip_seconds: 15,
            restart_threshold: Duration::from_secs(3),
        }
    }
}

/// Format a position as `m:ss` for display
pub fn format_time(time: Duration) -> String {
    let total = time.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.volume, 0.8);
        assert_eq!(config.skip_seconds, 15);
        assert_eq!(config.restart_threshold, Duration::from_secs(3));
    }

    #[test]
    fn repeat_mode_cycles() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(Duration::ZERO), "0:00");
        assert_eq!(format_time(Duration::from_secs(65)), "1:05");
        assert_eq!(format_time(Duration::from_secs(600)), "10:00");
    }
}
