//! Drift Player - Catalog Client
//!
//! Async HTTP client for the track and station catalog, with a sample-data
//! fallback so a network failure never leaves the player without music.
//!
//! - [`HttpCatalog`] talks to the catalog API (30 s request timeout, 10 s
//!   connect timeout).
//! - [`CatalogWithFallback`] degrades fetch failures to built-in samples.
//! - [`RequestTracker`] lets callers apply only the newest refresh when
//!   requests overlap.

use async_trait::async_trait;
use drift_core::types::{RadioStation, Track};

mod client;
mod error;
mod fallback;
mod latest;
pub mod types;

pub use client::{CatalogConfig, HttpCatalog};
pub use error::{CatalogError, Result};
pub use fallback::CatalogWithFallback;
pub use latest::RequestTracker;

/// Source of tracks and radio stations
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch a page of tracks
    async fn fetch_tracks(&self, page: u32, limit: u32) -> Result<Vec<Track>>;

    /// Full-text track search
    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>>;

    /// Tracks of a single genre
    async fn fetch_tracks_by_genre(&self, genre: &str) -> Result<Vec<Track>>;

    /// All available radio stations
    async fn fetch_stations(&self) -> Result<Vec<RadioStation>>;
}
