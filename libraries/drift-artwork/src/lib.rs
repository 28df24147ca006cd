//! Drift Player - Artwork
//!
//! Album and station artwork caching. A bounded LRU cache (100 entries,
//! 50 MiB) sits behind an async HTTP fetcher that coalesces concurrent
//! requests for the same URL into a single fetch.

mod cache;
mod error;
mod fetcher;

pub use cache::{ArtworkCache, DEFAULT_BYTE_BUDGET, DEFAULT_MAX_ENTRIES};
pub use error::{ArtworkError, Result};
pub use fetcher::ArtworkFetcher;
