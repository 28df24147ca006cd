//! Drift Player - Focus Timer
//!
//! Deterministic focus timer with presets and a persisted session log.
//!
//! The countdown is a synchronous state machine: the host calls
//! [`TimerManager::tick`] once per second (or uses [`ticker::spawn_ticker`]
//! for a tokio-driven loop). Pause invalidates ticks synchronously, so a tick
//! delivered after `pause()` can never decrement the countdown.
//!
//! # Example
//!
//! ```rust
//! use drift_focus::{FocusPreset, SessionLog, TimerManager, TimerState};
//! use drift_core::{JsonStore, NullNotificationScheduler};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let log = SessionLog::open(JsonStore::open(dir.path()).unwrap()).unwrap();
//! let mut manager = TimerManager::new(log, NullNotificationScheduler);
//!
//! manager.start_preset(FocusPreset::Pomodoro).unwrap();
//! for _ in 0..25 * 60 {
//!     manager.tick();
//! }
//! assert_eq!(manager.active_timer().unwrap().state, TimerState::Completed);
//! assert_eq!(manager.log().completed_count(), 1);
//! ```

mod error;
mod manager;
mod preset;
mod session;
pub mod ticker;
mod timer;

pub use error::{FocusError, Result};
pub use manager::TimerManager;
pub use preset::FocusPreset;
pub use session::{FocusSession, SessionLog};
pub use timer::{FocusTimer, TimerState};
