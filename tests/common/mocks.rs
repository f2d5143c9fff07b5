use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use funzone_scraper::{ScrapeError, Transport};

/// Mock transport that serves canned documents and counts every fetch
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    request_log: Arc<Mutex<Vec<FetchRequest>>>,
    calls: Arc<AtomicUsize>,
}

#[derive(Clone, Debug)]
pub enum MockResponse {
    Document(String),
    Status(u16),
    Timeout,
    /// Serve the document only after the gate is notified
    Gated(String, Arc<Notify>),
}

#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub url: String,
    pub wait: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    pub fn add_document(&self, url: &str, body: &str) {
        self.add_response(url, MockResponse::Document(body.to_string()));
    }

    pub fn add_error_response(&self, url: &str, status: u16) {
        self.add_response(url, MockResponse::Status(status));
    }

    pub fn add_timeout_response(&self, url: &str) {
        self.add_response(url, MockResponse::Timeout);
    }

    /// Number of fetches attempted so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn get_request_log(&self) -> Vec<FetchRequest> {
        self.request_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, url: &str, wait: Duration) -> Result<String, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.request_log.lock().unwrap().push(FetchRequest {
            url: url.to_string(),
            wait,
        });

        let response = self.responses.lock().unwrap().get(url).cloned();

        match response {
            Some(MockResponse::Document(body)) => Ok(body),
            Some(MockResponse::Gated(body, gate)) => {
                gate.notified().await;
                Ok(body)
            }
            Some(MockResponse::Status(status)) => Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status,
                message: format!("HTTP {}", status),
            }),
            Some(MockResponse::Timeout) => Err(ScrapeError::Timeout {
                url: url.to_string(),
                timeout_seconds: wait.as_secs(),
            }),
            None => Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: 404,
                message: "HTTP 404: Not Found".to_string(),
            }),
        }
    }
}
