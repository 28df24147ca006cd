//! Bounded in-memory artwork cache

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default entry cap
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default total byte budget (50 MiB)
pub const DEFAULT_BYTE_BUDGET: usize = 50 * 1024 * 1024;

/// LRU image cache bounded by entry count and total bytes
///
/// Inserting past either bound evicts least-recently-used entries until the
/// new image fits. An image larger than the whole byte budget is never
/// cached.
pub struct ArtworkCache {
    entries: LruCache<String, Arc<Vec<u8>>>,
    total_bytes: usize,
    byte_budget: usize,
}

impl ArtworkCache {
    /// Cache with the default bounds (100 entries, 50 MiB)
    pub fn new() -> Self {
        Self::with_bounds(DEFAULT_MAX_ENTRIES, DEFAULT_BYTE_BUDGET)
    }

    /// Cache with explicit bounds
    ///
    /// An entry cap of 0 is treated as 1.
    pub fn with_bounds(max_entries: usize, byte_budget: usize) -> Self {
        let cap = NonZeroUsize::new(max_entries.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            total_bytes: 0,
            byte_budget,
        }
    }

    /// Look up an image, marking it most recently used
    pub fn get(&mut self, url: &str) -> Option<Arc<Vec<u8>>> {
        self.entries.get(url).cloned()
    }

    /// Insert an image, evicting as needed to stay within bounds
    ///
    /// Returns false when the image alone exceeds the byte budget and was
    /// not cached.
    pub fn put(&mut self, url: String, data: Arc<Vec<u8>>) -> bool {
        let size = data.len();
        if size > self.byte_budget {
            return false;
        }

        if let Some(old) = self.entries.pop(&url) {
            self.total_bytes -= old.len();
        }
        while self.total_bytes + size > self.byte_budget {
            match self.entries.pop_lru() {
                Some((_, evicted)) => self.total_bytes -= evicted.len(),
                None => break,
            }
        }
        if let Some((_, evicted)) = self.entries.push(url, data) {
            // Entry-cap eviction
            self.total_bytes -= evicted.len();
        }
        self.total_bytes += size;
        true
    }

    /// Number of cached images
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes currently cached
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Drop all cached images
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_bytes = 0;
    }
}

impl Default for ArtworkCache {
    fn default() -> Self {
        Self::new()
    }
}
