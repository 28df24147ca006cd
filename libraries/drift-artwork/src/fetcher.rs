//! Async artwork fetching with request coalescing

use crate::cache::ArtworkCache;
use crate::error::{ArtworkError, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches artwork over HTTP, backed by an [`ArtworkCache`]
///
/// Concurrent requests for the same URL are coalesced: the first caller
/// fetches, the rest wait and then read the cached result.
pub struct ArtworkFetcher {
    http: Client,
    cache: Mutex<ArtworkCache>,
    in_flight: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl ArtworkFetcher {
    /// Fetcher with the default cache bounds
    pub fn new() -> Result<Self> {
        Self::with_cache(ArtworkCache::new())
    }

    /// Fetcher over an explicitly bounded cache
    pub fn with_cache(cache: ArtworkCache) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(ArtworkError::Request)?;
        Ok(Self {
            http,
            cache: Mutex::new(cache),
            in_flight: Mutex::new(HashMap::new()),
        })
    }

    /// Get an image from the cache, fetching it on a miss
    pub async fn get_or_fetch(&self, url: &str) -> Result<Arc<Vec<u8>>> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ArtworkError::InvalidUrl(url.to_string()));
        }

        if let Some(data) = self.cache.lock().unwrap().get(url) {
            return Ok(data);
        }

        // One fetch per URL at a time; late arrivals hit the cache after
        // the winner populates it.
        let gate = self
            .in_flight
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .clone();
        let _guard = gate.lock().await;

        if let Some(data) = self.cache.lock().unwrap().get(url) {
            return Ok(data);
        }

        let result = self.fetch(url).await;

        drop(_guard);
        self.in_flight.lock().unwrap().remove(url);

        let data = result?;
        self.cache.lock().unwrap().put(url.to_string(), data.clone());
        Ok(data)
    }

    /// Cache-or-fetch that degrades failure to `None` with a warning
    pub async fn get_opt(&self, url: &str) -> Option<Arc<Vec<u8>>> {
        match self.get_or_fetch(url).await {
            Ok(data) => Some(data),
            Err(e) => {
                warn!(url = %url, error = %e, "artwork fetch failed");
                None
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<Arc<Vec<u8>>> {
        debug!(url = %url, "fetching artwork");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ArtworkError::ServerError(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(Arc::new(bytes.to_vec()))
    }

    /// Number of cached images
    pub fn cached_count(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Drop all cached images
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }
}
