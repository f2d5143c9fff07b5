use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::timeout;

use crate::config::NetworkConfig;
use crate::error::ScrapeError;

/// Source of raw zone documents.
///
/// Implementations make a single attempt bounded by `wait` and report every
/// failure as a [`ScrapeError`]; retrying is not their business.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str, wait: Duration) -> Result<String, ScrapeError>;
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Accept header value
    pub accept: String,
    /// Accept-Language header value
    pub accept_language: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&NetworkConfig::default())
    }
}

impl From<&NetworkConfig> for HttpClientConfig {
    fn from(network: &NetworkConfig) -> Self {
        Self {
            timeout_seconds: network.timeout_seconds,
            user_agent: network.user_agent.clone(),
            accept: network.accept.clone(),
            accept_language: network.accept_language.clone(),
        }
    }
}

/// reqwest-backed transport used by the binary
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value(&config.accept)?);
        headers.insert(ACCEPT_LANGUAGE, header_value(&config.accept_language)?);

        // gzip/deflate/brotli features add Accept-Encoding and decode bodies
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(ScrapeError::from)?;

        Ok(Self { client })
    }

    /// Make a single HTTP request with timeout
    async fn make_request(&self, url: &str, wait: Duration) -> Result<Response, ScrapeError> {
        let request_future = self.client.get(url).timeout(wait).send();

        timeout(wait, request_future)
            .await
            .map_err(|_| ScrapeError::Timeout {
                url: url.to_string(),
                timeout_seconds: wait.as_secs(),
            })?
            .map_err(|e| classify(url, wait, e))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, wait: Duration) -> Result<String, ScrapeError> {
        let response = self.make_request(url, wait).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                message: format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        response.text().await.map_err(|e| classify(url, wait, e))
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ScrapeError> {
    HeaderValue::from_str(value).map_err(|e| ScrapeError::InvalidHeader {
        value: value.to_string(),
        details: e.to_string(),
    })
}

// reqwest reports its own deadline as an error; surface it as a timeout
fn classify(url: &str, wait: Duration, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
            timeout_seconds: wait.as_secs(),
        }
    } else {
        ScrapeError::Http(error)
    }
}
