//! Focus timer value type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timer lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    /// Not started
    Idle,
    /// Counting down
    Running,
    /// Suspended, remaining time frozen
    Paused,
    /// Reached zero
    Completed,
}

impl TimerState {
    /// Short name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Completed => "completed",
        }
    }
}

/// A countdown timer
///
/// Invariant: `remaining <= duration` at all times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    /// Total configured duration
    pub duration: Duration,

    /// Time left on the countdown
    pub remaining: Duration,

    /// Lifecycle state
    pub state: TimerState,

    /// When the countdown started
    pub started_at: Option<DateTime<Utc>>,

    /// When the countdown was last paused
    pub paused_at: Option<DateTime<Utc>>,
}

impl FocusTimer {
    /// Create an idle timer for the given duration
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
            state: TimerState::Idle,
            started_at: None,
            paused_at: None,
        }
    }

    /// Elapsed time so far
    pub fn elapsed(&self) -> Duration {
        self.duration.saturating_sub(self.remaining)
    }

    /// Completion fraction in `[0.0, 1.0]` (1.0 for a zero-length timer)
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed().as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Format the remaining time as `h:mm:ss`, or `m:ss` under an hour
    pub fn format_remaining(&self) -> String {
        let total = self.remaining.as_secs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        }
    }
}
