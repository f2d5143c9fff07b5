//! # funzone-scraper Library
//!
//! Fetches There FunZone descriptions by URL, extracts their fields from the
//! FunZone XML (or falls back to pattern matching for other documents), and
//! caches results in-process for a few minutes.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod funzone;
pub mod http_client;
pub mod output;
pub mod record;
pub mod scraper;
pub mod summary;

pub use cache::{CacheEntry, CacheStats, CacheStore};
pub use cli::{Cli, VerbosityLevel};
pub use config::{
    CacheConfig, ConfigError, ConfigManager, LimitsConfig, LoggingConfig, NetworkConfig,
    ScraperConfig,
};
pub use error::ScrapeError;
pub use fallback::FallbackExtractor;
pub use funzone::FunZoneExtractor;
pub use http_client::{HttpClientConfig, HttpTransport, Transport};
pub use output::{render_line, write_result};
pub use record::{MapRecord, ScrapeResult, normalize_field};
pub use scraper::{ZoneScraper, is_valid_zone_url};
pub use summary::format_summary;
