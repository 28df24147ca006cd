//! Track type

use super::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable track
///
/// Immutable value type. Two tracks are equal when their IDs are equal,
/// regardless of metadata differences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album artwork URL (optional)
    pub album_art_url: Option<String>,

    /// Stream locator for the audio renderer
    pub stream_url: String,

    /// Track duration (zero when unknown, e.g. live streams)
    pub duration: Duration,

    /// Genre label
    pub genre: String,
}

impl Track {
    /// Create a new track with a generated ID
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        stream_url: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            album_art_url: None,
            stream_url: stream_url.into(),
            duration: Duration::ZERO,
            genre: "Lofi".to_string(),
        }
    }

    /// Attach an album art URL
    pub fn with_album_art(mut self, url: impl Into<String>) -> Self {
        self.album_art_url = Some(url.into());
        self
    }

    /// Set the track duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the genre label
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Built-in sample playlist
    ///
    /// Used as the fallback whenever a catalog fetch fails, so consumers are
    /// never left with an empty queue.
    pub fn sample_tracks() -> Vec<Track> {
        vec![
            Track::new(
                "Neighbourhood",
                "Colombo & Massaman",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
            )
            .with_album_art("https://picsum.photos/400/400?blur=2")
            .with_duration(Duration::from_secs(180))
            .with_genre("College Music"),
            Track::new(
                "Midnight Dreams",
                "Lofi Collective",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
            )
            .with_album_art("https://picsum.photos/400/400?blur=2&random=2")
            .with_duration(Duration::from_secs(210))
            .with_genre("Lofi Hip Hop"),
            Track::new(
                "Study Session",
                "Chill Beats",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
            )
            .with_album_art("https://picsum.photos/400/400?blur=2&random=3")
            .with_duration(Duration::from_secs(195))
            .with_genre("Focus Music"),
        ]
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}
