//! Wire types for the catalog API

use drift_core::types::{RadioStation, StationId, Track, TrackId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Paged track listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksResponse {
    /// Tracks on this page
    pub tracks: Vec<TrackDto>,
    /// Total tracks matching the request
    pub total: u64,
    /// Page number of this response
    pub page: u32,
}

/// A track as the server sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDto {
    /// Server-assigned identifier
    pub id: String,
    /// Track title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Album artwork URL
    #[serde(default)]
    pub album_art_url: Option<String>,
    /// Audio stream URL
    pub stream_url: String,
    /// Duration in whole seconds (absent for live streams)
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    /// Genre label
    #[serde(default)]
    pub genre: Option<String>,
}

impl TrackDto {
    /// Convert into the domain track type
    pub fn into_track(self) -> Track {
        Track {
            id: TrackId::new(self.id),
            title: self.title,
            artist: self.artist,
            album_art_url: self.album_art_url,
            stream_url: self.stream_url,
            duration: Duration::from_secs(self.duration_seconds.unwrap_or(0)),
            genre: self.genre.unwrap_or_else(|| "Lofi".to_string()),
        }
    }
}

/// Station listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationsResponse {
    /// Available stations
    pub stations: Vec<StationDto>,
}

/// A radio station as the server sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    /// Server-assigned identifier
    pub id: String,
    /// Station name
    pub name: String,
    /// Audio stream URL
    pub stream_url: String,
    /// Cover image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Genre label
    #[serde(default)]
    pub genre: Option<String>,
    /// Station blurb
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the station is currently broadcasting
    #[serde(default = "default_live")]
    pub is_live: bool,
}

fn default_live() -> bool {
    true
}

impl StationDto {
    /// Convert into the domain station type
    pub fn into_station(self) -> RadioStation {
        RadioStation {
            id: StationId::new(self.id),
            name: self.name,
            stream_url: self.stream_url,
            image_url: self.image_url,
            genre: self.genre.unwrap_or_else(|| "Lofi".to_string()),
            description: self.description,
            is_live: self.is_live,
        }
    }
}
