use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Trait for abstracting environment variable access
pub trait EnvProvider {
    fn get(&self, key: &str) -> Option<String>;
}

/// System environment variable provider for production use
pub struct SystemEnvProvider;

impl EnvProvider for SystemEnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Environment variable error: {0}")]
    Environment(String),

    #[error("Unsupported configuration file format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ScraperConfig {
    pub network: NetworkConfig,
    pub cache: CacheConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Bounded wait for one document fetch, in seconds
    pub timeout_seconds: u64,
    /// User-Agent header
    pub user_agent: String,
    /// Accept header
    pub accept: String,
    /// Accept-Language header
    pub accept_language: String,
}

/// Result cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live for cached results in seconds
    pub ttl_seconds: u64,
    /// Maximum number of cached results
    pub max_entries: u64,
}

/// Concurrency limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Scrapes allowed in flight at once through one scraper
    pub max_concurrent: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            user_agent: "Mozilla/5.0 (compatible; TournamentSystem/1.0)".to_string(),
            accept: "application/xml, text/xml, */*".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 300, // 5 minutes
            max_entries: 1000,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_concurrent: 2 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Configuration manager for loading and merging configurations
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration with precedence: defaults -> file -> environment -> CLI
    pub async fn load_config(cli: &Cli) -> Result<ScraperConfig> {
        let mut config = match &cli.config {
            Some(config_path) => Self::load_from_file(config_path).await?,
            None => Self::find_config_file().await?.unwrap_or_default(),
        };

        config = Self::apply_environment_overrides(config)?;
        config = Self::merge_with_cli(config, cli);

        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Load configuration from a file (TOML or JSON)
    pub async fn load_from_file(path: &Path) -> Result<ScraperConfig> {
        let content = tokio::fs::read_to_string(path).await?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => {
                // Try to parse as TOML first, then JSON
                if let Ok(config) = toml::from_str::<ScraperConfig>(&content) {
                    Ok(config)
                } else {
                    Ok(serde_json::from_str(&content)?)
                }
            }
        }
    }

    /// Find configuration file in standard locations
    pub async fn find_config_file() -> Result<Option<ScraperConfig>> {
        let config_names = [
            "funzone-scraper.toml",
            "funzone-scraper.json",
            ".funzone-scraper.toml",
            ".funzone-scraper.json",
        ];

        // Check current directory first
        for name in &config_names {
            let path = PathBuf::from(name);
            if path.exists() {
                return Ok(Some(Self::load_from_file(&path).await?));
            }
        }

        // Check user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_config_dir = config_dir.join("funzone-scraper");
            for name in &config_names {
                let path = app_config_dir.join(name);
                if path.exists() {
                    return Ok(Some(Self::load_from_file(&path).await?));
                }
            }
        }

        Ok(None)
    }

    /// Apply environment variable overrides using the system environment
    pub fn apply_environment_overrides(config: ScraperConfig) -> Result<ScraperConfig> {
        Self::apply_environment_overrides_with(&SystemEnvProvider, config)
    }

    /// Apply environment variable overrides with a custom environment provider
    pub fn apply_environment_overrides_with(
        env: &impl EnvProvider,
        mut config: ScraperConfig,
    ) -> Result<ScraperConfig> {
        if let Some(timeout) = env.get("FUNZONE_SCRAPER_TIMEOUT") {
            config.network.timeout_seconds = parse_env("FUNZONE_SCRAPER_TIMEOUT", &timeout)?;
        }

        if let Some(user_agent) = env.get("FUNZONE_SCRAPER_USER_AGENT") {
            config.network.user_agent = user_agent;
        }

        if let Some(cache_ttl) = env.get("FUNZONE_SCRAPER_CACHE_TTL") {
            config.cache.ttl_seconds = parse_env("FUNZONE_SCRAPER_CACHE_TTL", &cache_ttl)?;
        }

        if let Some(capacity) = env.get("FUNZONE_SCRAPER_CACHE_CAPACITY") {
            config.cache.max_entries = parse_env("FUNZONE_SCRAPER_CACHE_CAPACITY", &capacity)?;
        }

        if let Some(max_concurrent) = env.get("FUNZONE_SCRAPER_MAX_CONCURRENT") {
            config.limits.max_concurrent =
                parse_env("FUNZONE_SCRAPER_MAX_CONCURRENT", &max_concurrent)?;
        }

        if let Some(filter) = env.get("FUNZONE_SCRAPER_LOG") {
            config.logging.filter = filter;
        }

        Ok(config)
    }

    /// Merge CLI arguments with configuration (CLI takes precedence when given)
    pub fn merge_with_cli(mut config: ScraperConfig, cli: &Cli) -> ScraperConfig {
        if let Some(timeout) = cli.timeout {
            config.network.timeout_seconds = timeout;
        }
        if let Some(cache_ttl) = cli.cache_ttl {
            config.cache.ttl_seconds = cache_ttl;
        }
        if let Some(filter) = cli.verbosity().filter_override() {
            config.logging.filter = filter.to_string();
        }

        config
    }

    /// Validate configuration values
    pub fn validate_config(config: &ScraperConfig) -> Result<()> {
        if config.network.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if config.network.user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "User agent must not be empty".to_string(),
            ));
        }

        if config.cache.ttl_seconds == 0 {
            return Err(ConfigError::Validation(
                "Cache TTL must be greater than 0".to_string(),
            ));
        }

        if config.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "Cache capacity must be greater than 0".to_string(),
            ));
        }

        if config.limits.max_concurrent == 0 {
            return Err(ConfigError::Validation(
                "Concurrent scrape limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Configuration to run with when [`ConfigManager::load_config`] fails:
    /// defaults with the CLI flags applied, or bare defaults if the flags
    /// themselves are invalid.
    pub fn fallback_config(cli: &Cli) -> ScraperConfig {
        let config = Self::merge_with_cli(ScraperConfig::default(), cli);
        match Self::validate_config(&config) {
            Ok(()) => config,
            Err(_) => ScraperConfig::default(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Environment(format!("Invalid {} value: {}", name, value)))
}
