use thiserror::Error;

/// Every way a single zone scrape can fail.
///
/// None of these escape [`crate::ZoneScraper::fetch_zone_data`]; they are
/// logged there and collapsed into "no result".
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Invalid zone URL: {url:?} - an https:// URL is required")]
    InvalidUrl { url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status error: {status} for {url} - {message}")]
    HttpStatus {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Request timeout: {url} after {timeout_seconds} seconds")]
    Timeout { url: String, timeout_seconds: u64 },

    #[error("Invalid request header value {value:?}: {details}")]
    InvalidHeader { value: String, details: String },

    #[error("Empty document returned from {url}")]
    EmptyDocument { url: String },

    #[error("Malformed zone document: {details}")]
    MalformedDocument { details: String },

    #[error("Incomplete zone document: {details}")]
    IncompleteDocument { details: String },

    #[error("Scraper busy: {limit} scrapes already in flight")]
    Busy { limit: usize },
}

impl ScrapeError {
    /// True for failures raised by the network layer rather than by parsing.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ScrapeError::Http(_) | ScrapeError::HttpStatus { .. } | ScrapeError::Timeout { .. }
        )
    }

    /// True for failures caused by the document content itself.
    pub fn is_document(&self) -> bool {
        matches!(
            self,
            ScrapeError::EmptyDocument { .. }
                | ScrapeError::MalformedDocument { .. }
                | ScrapeError::IncompleteDocument { .. }
        )
    }
}

impl From<roxmltree::Error> for ScrapeError {
    fn from(err: roxmltree::Error) -> Self {
        ScrapeError::MalformedDocument {
            details: err.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_error_display() {
        let invalid = ScrapeError::InvalidUrl {
            url: "http://example.com".to_string(),
        };
        assert!(invalid.to_string().contains("https://"));
        assert!(invalid.to_string().contains("http://example.com"));

        let status = ScrapeError::HttpStatus {
            url: "https://example.com/zone".to_string(),
            status: 404,
            message: "HTTP 404: Not Found".to_string(),
        };
        assert!(status.to_string().contains("HTTP status error"));
        assert!(status.to_string().contains("404"));

        let timeout = ScrapeError::Timeout {
            url: "https://example.com/zone".to_string(),
            timeout_seconds: 10,
        };
        assert!(timeout.to_string().contains("after 10 seconds"));

        let busy = ScrapeError::Busy { limit: 2 };
        assert!(busy.to_string().contains("2 scrapes"));
    }

    #[test]
    fn test_roxmltree_error_conversion() {
        let parse_error = roxmltree::Document::parse("<FunZoneDetail>").unwrap_err();
        let scrape_error: ScrapeError = parse_error.into();

        match scrape_error {
            ScrapeError::MalformedDocument { .. } => (),
            _ => panic!("Expected ScrapeError::MalformedDocument"),
        }
    }

    #[test]
    fn test_error_classification() {
        let timeout = ScrapeError::Timeout {
            url: "https://example.com".to_string(),
            timeout_seconds: 1,
        };
        assert!(timeout.is_transport());
        assert!(!timeout.is_document());

        let incomplete = ScrapeError::IncompleteDocument {
            details: "no FunZone element".to_string(),
        };
        assert!(incomplete.is_document());
        assert!(!incomplete.is_transport());

        let busy = ScrapeError::Busy { limit: 1 };
        assert!(!busy.is_transport());
        assert!(!busy.is_document());
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<String> = Ok("zone".to_string());
        assert!(success.is_ok());

        let failure: Result<String> = Err(ScrapeError::EmptyDocument {
            url: "https://example.com".to_string(),
        });
        assert!(failure.is_err());
    }
}
