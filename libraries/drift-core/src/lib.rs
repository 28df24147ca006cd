//! Drift Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Drift Player.
//!
//! This crate provides the foundational building blocks shared by the
//! playback, focus, catalog, and favorites libraries:
//! - **Domain types**: [`Track`], [`RadioStation`], [`Tier`]
//! - **Collaborator traits**: [`SessionStore`], [`NotificationScheduler`]
//! - **Error handling**: unified [`CoreError`] and [`Result`] types
//! - **Persistence**: [`JsonStore`], a small JSON-file key-value store
//!
//! # Example
//!
//! ```rust
//! use drift_core::types::{Track, RadioStation};
//!
//! let playlist = Track::sample_tracks();
//! assert!(!playlist.is_empty());
//!
//! let station = &RadioStation::sample_stations()[0];
//! let live = station.to_track();
//! assert_eq!(live.artist, "Live Radio");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use storage::JsonStore;
pub use traits::{NotificationScheduler, NullNotificationScheduler, SessionStore};
pub use types::{RadioStation, StationId, Tier, Track, TrackId};
