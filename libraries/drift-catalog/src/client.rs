//! HTTP catalog client

use crate::error::{CatalogError, Result};
use crate::types::{StationsResponse, TracksResponse};
use crate::Catalog;
use async_trait::async_trait;
use drift_core::types::{RadioStation, Track};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Catalog client configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog server
    pub base_url: String,
    /// Overall request deadline
    pub request_timeout: Duration,
    /// Connection establishment deadline
    pub connect_timeout: Duration,
}

impl CatalogConfig {
    /// Configuration for the given server with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Catalog backed by an HTTP API
///
/// Endpoints: `GET /tracks`, `GET /tracks/search`, `GET /radio/stations`.
pub struct HttpCatalog {
    http: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a client, validating and normalizing the base URL
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("DriftPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "catalog request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout(e.to_string())
                } else {
                    CatalogError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn fetch_tracks(&self, page: u32, limit: u32) -> Result<Vec<Track>> {
        let response: TracksResponse = self
            .get_json(
                "/tracks",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(response
            .tracks
            .into_iter()
            .map(|dto| dto.into_track())
            .collect())
    }

    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        let response: TracksResponse = self
            .get_json("/tracks/search", &[("q", query.to_string())])
            .await?;
        Ok(response
            .tracks
            .into_iter()
            .map(|dto| dto.into_track())
            .collect())
    }

    async fn fetch_tracks_by_genre(&self, genre: &str) -> Result<Vec<Track>> {
        let response: TracksResponse = self
            .get_json("/tracks", &[("genre", genre.to_string())])
            .await?;
        Ok(response
            .tracks
            .into_iter()
            .map(|dto| dto.into_track())
            .collect())
    }

    async fn fetch_stations(&self) -> Result<Vec<RadioStation>> {
        let response: StationsResponse = self.get_json("/radio/stations", &[]).await?;
        Ok(response
            .stations
            .into_iter()
            .map(|dto| dto.into_station())
            .collect())
    }
}
