use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use moka::future::Cache;

use crate::config::CacheConfig;
use crate::record::ScrapeResult;

/// Prefix namespacing scrape results within the cache key space.
pub const CACHE_KEY_PREFIX: &str = "map_data_";

/// A cached scrape result and the moment it was written
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub result: ScrapeResult,
    pub written_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(result: ScrapeResult, written_at: DateTime<Utc>) -> Self {
        Self { result, written_at }
    }

    /// An entry is live while `now - written_at < ttl`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match TimeDelta::from_std(ttl) {
            Ok(ttl) => now.signed_duration_since(self.written_at) >= ttl,
            // A TTL too large to represent never runs out
            Err(_) => false,
        }
    }
}

/// Process-lifetime memoization of scrape results, keyed by URL.
///
/// Expired entries are reported as misses and left in place until the next
/// write for the same key replaces them. The map is bounded by capacity;
/// `moka` evicts the least valuable entries when it fills.
pub struct CacheStore {
    cache: Cache<String, Arc<CacheEntry>>,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_entries).build();

        Self { cache, ttl }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(Duration::from_secs(config.ttl_seconds), config.max_entries)
    }

    /// Generate the cache key for a zone URL
    pub fn generate_key(url: &str) -> String {
        format!("{}{}", CACHE_KEY_PREFIX, url)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Live result stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<ScrapeResult> {
        self.get_at(key, Utc::now()).await
    }

    /// Live result stored under `key`, judged against the instant `now`.
    pub async fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<ScrapeResult> {
        let entry = self.cache.get(key).await?;

        if entry.is_expired_at(now, self.ttl) {
            tracing::debug!(key, written_at = %entry.written_at, "cache entry expired");
            return None;
        }

        Some(entry.result.clone())
    }

    /// Store `result` under `key`, stamped with the current time.
    pub async fn put(&self, key: String, result: ScrapeResult) {
        self.put_at(key, result, Utc::now()).await;
    }

    /// Store `result` under `key`, stamped with `written_at`.
    pub async fn put_at(&self, key: String, result: ScrapeResult, written_at: DateTime<Utc>) {
        let entry = Arc::new(CacheEntry::new(result, written_at));
        self.cache.insert(key, entry).await;
    }

    /// Check if a live entry exists for `key`
    pub async fn contains(&self, key: &str) -> bool {
        self.get(key).await.is_some()
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        // Run sync to ensure all pending operations are complete
        self.cache.run_pending_tasks().await;

        CacheStats {
            entry_count: self.cache.entry_count(),
        }
    }

    /// Clear all entries
    pub async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

/// Statistics for cache operations
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Stored entries, live or expired
    pub entry_count: u64,
}
