//! Radio station type

use super::{StationId, Track, TrackId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A live radio station
///
/// Equality is by ID, matching [`Track`] semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioStation {
    /// Unique station identifier
    pub id: StationId,

    /// Station name
    pub name: String,

    /// Stream locator
    pub stream_url: String,

    /// Station artwork URL (optional)
    pub image_url: Option<String>,

    /// Genre label
    pub genre: String,

    /// Station description (optional)
    pub description: Option<String>,

    /// Whether the station is currently live
    pub is_live: bool,
}

impl RadioStation {
    /// Create a new station with a generated ID
    pub fn new(name: impl Into<String>, stream_url: impl Into<String>) -> Self {
        Self {
            id: StationId::generate(),
            name: name.into(),
            stream_url: stream_url.into(),
            image_url: None,
            genre: "Lofi".to_string(),
            description: None,
            is_live: true,
        }
    }

    /// Attach an artwork URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the genre label
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Convert the station into a playable live-radio track
    ///
    /// Live streams have no known duration; the artist slot carries the
    /// "Live Radio" label for display.
    pub fn to_track(&self) -> Track {
        Track {
            id: TrackId::new(self.id.as_str()),
            title: self.name.clone(),
            artist: "Live Radio".to_string(),
            album_art_url: self.image_url.clone(),
            stream_url: self.stream_url.clone(),
            duration: Duration::ZERO,
            genre: self.genre.clone(),
        }
    }

    /// Built-in sample stations, used as the catalog fallback
    pub fn sample_stations() -> Vec<RadioStation> {
        vec![
            RadioStation::new(
                "Lofi Girl Radio",
                "https://streams.ilovemusic.de/iloveradio17.mp3",
            )
            .with_image("https://picsum.photos/400/400?random=10")
            .with_genre("Lofi Hip Hop")
            .with_description("24/7 lofi hip hop beats to relax/study to"),
            RadioStation::new(
                "ChillHop Radio",
                "https://streams.ilovemusic.de/iloveradio2.mp3",
            )
            .with_image("https://picsum.photos/400/400?random=11")
            .with_genre("Chillhop")
            .with_description("Chill beats and smooth jazz"),
            RadioStation::new(
                "Ambient Sounds",
                "https://streams.ilovemusic.de/iloveradio1.mp3",
            )
            .with_image("https://picsum.photos/400/400?random=12")
            .with_genre("Ambient")
            .with_description("Peaceful ambient music for sleep and focus"),
        ]
    }
}

impl PartialEq for RadioStation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RadioStation {}
