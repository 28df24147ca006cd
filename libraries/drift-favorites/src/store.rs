//! Favorites store with tier cap

use crate::error::Result;
use crate::favorite::Favorite;
use drift_core::types::{Track, TrackId};
use drift_core::{JsonStore, SessionStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const STORE_KEY: &str = "favorites";

/// Maximum favorites on the free tier
pub const FREE_TIER_LIMIT: usize = 25;

/// Persisted shape: the entry list plus track snapshots for offline display
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedFavorites {
    favorites: Vec<Favorite>,
    tracks: Vec<Track>,
}

/// Favorite tracks, newest first, capped at [`FREE_TIER_LIMIT`] for free users
///
/// Adding past the cap is a clean rejection: the store is not mutated and
/// nothing is persisted.
pub struct FavoritesStore<S: SessionStore> {
    store: JsonStore,
    session: S,
    // Parallel vecs, same order (newest first)
    favorites: Vec<Favorite>,
    tracks: Vec<Track>,
}

impl<S: SessionStore> FavoritesStore<S> {
    /// Open the store, loading any persisted favorites
    pub fn open(store: JsonStore, session: S) -> Result<Self> {
        let data = store
            .load::<PersistedFavorites>(STORE_KEY)?
            .unwrap_or_default();
        Ok(Self {
            store,
            session,
            favorites: data.favorites,
            tracks: data.tracks,
        })
    }

    /// Whether the track is favorited
    pub fn is_favorite(&self, track_id: &TrackId) -> bool {
        self.favorites.iter().any(|f| &f.track_id == track_id)
    }

    /// Add a favorite
    ///
    /// Returns `Ok(true)` when the track is a favorite afterwards and
    /// `Ok(false)` when the tier cap blocked the add. Adding an existing
    /// favorite is a no-op returning `Ok(true)`.
    pub fn add(&mut self, track: &Track) -> Result<bool> {
        if self.is_favorite(&track.id) {
            return Ok(true);
        }
        if !self.can_add_more() {
            debug!(track = %track.id, limit = FREE_TIER_LIMIT, "favorites cap reached");
            return Ok(false);
        }

        self.favorites.insert(0, Favorite::new(track.id.clone()));
        self.tracks.insert(0, track.clone());
        self.persist()?;
        info!(track = %track.id, count = self.count(), "favorite added");
        Ok(true)
    }

    /// Remove a favorite; returns whether it existed
    pub fn remove(&mut self, track_id: &TrackId) -> Result<bool> {
        let Some(index) = self.favorites.iter().position(|f| &f.track_id == track_id) else {
            return Ok(false);
        };
        self.favorites.remove(index);
        self.tracks.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Toggle favorite status; returns whether the track is now a favorite
    ///
    /// A toggle-on blocked by the cap returns `Ok(false)` without mutating.
    pub fn toggle(&mut self, track: &Track) -> Result<bool> {
        if self.is_favorite(&track.id) {
            self.remove(&track.id)?;
            Ok(false)
        } else {
            self.add(track)
        }
    }

    /// Number of favorites
    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Whether the current tier allows another favorite
    pub fn can_add_more(&self) -> bool {
        self.session.is_premium() || self.count() < FREE_TIER_LIMIT
    }

    /// Favorites left before the cap (`None` means unlimited)
    pub fn remaining(&self) -> Option<usize> {
        if self.session.is_premium() {
            None
        } else {
            Some(FREE_TIER_LIMIT.saturating_sub(self.count()))
        }
    }

    /// Favorite entries, newest first
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Track snapshots for the favorites, newest first
    pub fn favorite_tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The session backing the tier check
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Mutable access to the session (tier changes)
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Remove all favorites
    pub fn clear(&mut self) -> Result<()> {
        self.favorites.clear();
        self.tracks.clear();
        self.store.remove(STORE_KEY)?;
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let data = PersistedFavorites {
            favorites: self.favorites.clone(),
            tracks: self.tracks.clone(),
        };
        self.store.save(STORE_KEY, &data)?;
        Ok(())
    }
}
