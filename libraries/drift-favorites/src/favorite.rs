//! Favorite entry type

use chrono::{DateTime, Utc};
use drift_core::types::TrackId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A favorited track reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Unique favorite identifier
    pub id: Uuid,

    /// The favorited track
    pub track_id: TrackId,

    /// When the favorite was added
    pub added_at: DateTime<Utc>,
}

impl Favorite {
    /// Favorite the given track now
    pub fn new(track_id: TrackId) -> Self {
        Self {
            id: Uuid::new_v4(),
            track_id,
            added_at: Utc::now(),
        }
    }
}
