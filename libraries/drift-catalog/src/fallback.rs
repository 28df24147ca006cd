//! Sample-data fallback
//!
//! The player must never end up with an empty queue because the network is
//! down. This wrapper degrades every failed fetch to the built-in sample
//! catalog instead of surfacing an error.

use crate::error::Result;
use crate::Catalog;
use async_trait::async_trait;
use drift_core::types::{RadioStation, Track};
use tracing::warn;

/// Catalog decorator that falls back to sample data on any fetch failure
pub struct CatalogWithFallback<C: Catalog> {
    inner: C,
}

impl<C: Catalog> CatalogWithFallback<C> {
    /// Wrap a catalog
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped catalog
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

fn matches_query(track: &Track, needle: &str) -> bool {
    track.title.to_lowercase().contains(needle)
        || track.artist.to_lowercase().contains(needle)
        || track.genre.to_lowercase().contains(needle)
}

#[async_trait]
impl<C: Catalog> Catalog for CatalogWithFallback<C> {
    async fn fetch_tracks(&self, page: u32, limit: u32) -> Result<Vec<Track>> {
        match self.inner.fetch_tracks(page, limit).await {
            Ok(tracks) => Ok(tracks),
            Err(e) => {
                warn!(error = %e, "track fetch failed, using sample playlist");
                Ok(Track::sample_tracks())
            }
        }
    }

    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        match self.inner.search_tracks(query).await {
            Ok(tracks) => Ok(tracks),
            Err(e) => {
                warn!(error = %e, query = %query, "search failed, filtering sample playlist");
                let needle = query.to_lowercase();
                Ok(Track::sample_tracks()
                    .into_iter()
                    .filter(|t| matches_query(t, &needle))
                    .collect())
            }
        }
    }

    async fn fetch_tracks_by_genre(&self, genre: &str) -> Result<Vec<Track>> {
        match self.inner.fetch_tracks_by_genre(genre).await {
            Ok(tracks) => Ok(tracks),
            Err(e) => {
                warn!(error = %e, genre = %genre, "genre fetch failed, filtering sample playlist");
                let needle = genre.to_lowercase();
                Ok(Track::sample_tracks()
                    .into_iter()
                    .filter(|t| t.genre.to_lowercase().contains(&needle))
                    .collect())
            }
        }
    }

    async fn fetch_stations(&self) -> Result<Vec<RadioStation>> {
        match self.inner.fetch_stations().await {
            Ok(stations) => Ok(stations),
            Err(e) => {
                warn!(error = %e, "station fetch failed, using sample stations");
                Ok(RadioStation::sample_stations())
            }
        }
    }
}
