//! Drift Player - Playback Management
//!
//! Platform-agnostic playback management for Drift Player.
//!
//! This crate provides:
//! - Playlist queue with a current-track pointer
//! - Transport state machine (idle, loading, playing, paused, stopped, errored)
//! - Shuffle with original-order restore (current track pinned)
//! - Repeat modes (Off, All, One)
//! - Seek with clamping, skip forward/backward
//! - Volume control with mute
//! - Pull-based event queue for UI synchronization
//!
//! # Architecture
//!
//! `drift-playback` owns no audio I/O. The host platform implements the
//! [`AudioRenderer`] trait and feeds renderer callbacks back into the
//! controller via [`PlayerController::handle_renderer_event`]. The controller
//! is intended to be driven from a single logical thread; it has no internal
//! locking.
//!
//! # Example
//!
//! ```rust
//! use drift_playback::{PlayerController, PlayerConfig, AudioRenderer, RendererEvent};
//! use drift_core::types::Track;
//! use std::time::Duration;
//!
//! struct SilentRenderer;
//!
//! impl AudioRenderer for SilentRenderer {
//!     fn load(&mut self, _stream_url: &str) -> drift_playback::Result<()> { Ok(()) }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn stop(&mut self) {}
//!     fn seek(&mut self, _position: Duration) -> drift_playback::Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _gain: f32) {}
//! }
//!
//! let mut player = PlayerController::new(Box::new(SilentRenderer), PlayerConfig::default());
//! player.set_playlist(Track::sample_tracks());
//! player.play_at(0).unwrap();
//!
//! // The host delivers renderer callbacks:
//! player.handle_renderer_event(RendererEvent::Ready {
//!     duration: Duration::from_secs(180),
//! });
//! assert!(player.is_playing());
//! ```

mod controller;
mod error;
mod events;
mod queue;
mod renderer;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use controller::PlayerController;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use renderer::{AudioRenderer, RendererEvent};
pub use types::{PlayerConfig, PlayerState, RepeatMode};
