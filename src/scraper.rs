//! Zone scraping pipeline
//!
//! [`ZoneScraper`] is the single entry point: it checks the URL, consults the
//! result cache, fetches the document, routes it to the FunZone or fallback
//! extractor, and caches the structured results it built. Failures of any kind end up as `None`
//! from [`ZoneScraper::fetch_zone_data`].

use std::time::Duration;

use tokio::sync::Semaphore;

use crate::cache::CacheStore;
use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::fallback::FallbackExtractor;
use crate::funzone::FunZoneExtractor;
use crate::http_client::{HttpClientConfig, HttpTransport, Transport};
use crate::record::ScrapeResult;
use crate::summary::format_summary;

/// Scheme every zone URL must use.
pub const REQUIRED_SCHEME: &str = "https://";

/// Whether `url` may be scraped at all.
pub fn is_valid_zone_url(url: &str) -> bool {
    !url.is_empty() && url.starts_with(REQUIRED_SCHEME)
}

pub struct ZoneScraper<T: Transport = HttpTransport> {
    transport: T,
    cache: CacheStore,
    funzone: FunZoneExtractor,
    fallback: FallbackExtractor,
    wait: Duration,
    slots: Semaphore,
    max_concurrent: usize,
}

impl ZoneScraper<HttpTransport> {
    /// Scraper backed by a real HTTP client built from `config`.
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let transport = HttpTransport::new(HttpClientConfig::from(&config.network))?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> ZoneScraper<T> {
    pub fn new(transport: T, config: &ScraperConfig) -> Self {
        Self {
            transport,
            cache: CacheStore::from_config(&config.cache),
            funzone: FunZoneExtractor::new(),
            fallback: FallbackExtractor::new(),
            wait: Duration::from_secs(config.network.timeout_seconds),
            slots: Semaphore::new(config.limits.max_concurrent),
            max_concurrent: config.limits.max_concurrent,
        }
    }

    /// Replace the result cache, e.g. with one using a different TTL.
    pub fn with_cache(mut self, cache: CacheStore) -> Self {
        self.cache = cache;
        self
    }

    /// Scrape `url`, collapsing every failure into `None`.
    pub async fn fetch_zone_data(&self, url: &str) -> Option<ScrapeResult> {
        match self.scrape(url).await {
            Ok(result) => Some(result),
            Err(error @ (ScrapeError::InvalidUrl { .. } | ScrapeError::Busy { .. })) => {
                tracing::debug!(url, error = %error, "zone scrape skipped");
                None
            }
            Err(error) => {
                tracing::warn!(
                    url,
                    error = %error,
                    transport = error.is_transport(),
                    document = error.is_document(),
                    "zone scrape failed"
                );
                None
            }
        }
    }

    /// Scrape `url`, reporting why it failed.
    ///
    /// A live cached result is returned without touching the transport. Only
    /// structured FunZone results are written to the cache; fallback results
    /// and failures are rebuilt on every call.
    pub async fn scrape(&self, url: &str) -> Result<ScrapeResult> {
        if !is_valid_zone_url(url) {
            return Err(ScrapeError::InvalidUrl {
                url: url.to_string(),
            });
        }

        let key = CacheStore::generate_key(url);
        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(url, "zone cache hit");
            return Ok(cached);
        }
        tracing::debug!(url, "zone cache miss");

        let _permit = self.slots.try_acquire().map_err(|_| ScrapeError::Busy {
            limit: self.max_concurrent,
        })?;

        let content = self.transport.fetch(url, self.wait).await?;
        if content.is_empty() {
            return Err(ScrapeError::EmptyDocument {
                url: url.to_string(),
            });
        }

        let result = self.extract(&content, url)?;
        if result.is_structured() {
            self.cache.put(key, result.clone()).await;
        }

        Ok(result)
    }

    /// Build a result from an already fetched document.
    pub fn extract(&self, content: &str, url: &str) -> Result<ScrapeResult> {
        if FunZoneExtractor::recognizes(content) {
            let record = self.funzone.extract(content)?.normalized();
            let formatted = format_summary(&record);
            Ok(ScrapeResult::new(formatted, Some(record)))
        } else {
            tracing::debug!(url, "document is not FunZone XML, using fallback");
            Ok(self.fallback.extract(content, url))
        }
    }

    /// Get the cache for direct access
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }
}
