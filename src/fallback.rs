use regex::Regex;
use std::sync::OnceLock;

use crate::record::ScrapeResult;
use crate::summary::join_parts;

/// Summary used when neither the URL nor the document yields anything.
pub const FALLBACK_SUMMARY: &str = "Map information available";

/// Cached regex for the numeric `id=` query parameter
static ZONE_ID_REGEX: OnceLock<Regex> = OnceLock::new();

/// Cached regex for the document `<title>`
static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_zone_id_regex() -> &'static Regex {
    ZONE_ID_REGEX.get_or_init(|| Regex::new(r"id=(\d+)").expect("Failed to compile zone id regex"))
}

fn get_title_regex() -> &'static Regex {
    TITLE_REGEX
        .get_or_init(|| Regex::new(r"<title>(.*?)</title>").expect("Failed to compile title regex"))
}

/// Best-effort extraction for documents that are not FunZone XML.
///
/// Never fails and never produces a structured record: the zone fields cannot
/// be mapped reliably from arbitrary markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackExtractor;

impl FallbackExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, content: &str, url: &str) -> ScrapeResult {
        let mut parts = Vec::with_capacity(2);

        if let Some(id) = zone_id(url) {
            parts.push(format!("Zone Map ID: {}", id));
        }

        if let Some(title) = page_title(content) {
            parts.push(format!("Title: {}", title));
        }

        ScrapeResult::new(join_parts(parts, FALLBACK_SUMMARY), None)
    }
}

/// Numeric zone identifier from an `id=` parameter in `url`.
pub fn zone_id(url: &str) -> Option<&str> {
    get_zone_id_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Contents of the first single-line `<title>` element in `content`.
pub fn page_title(content: &str) -> Option<&str> {
    get_title_regex()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONE_URL: &str = "https://webapps.prod.there.com/funzone/funzone?op=view&id=10714117";

    #[test]
    fn test_id_and_title() {
        let result = FallbackExtractor::new().extract(
            "<html><head><title>Sunset Plaza</title></head></html>",
            ZONE_URL,
        );
        assert_eq!(result.formatted, "Zone Map ID: 10714117 | Title: Sunset Plaza");
        assert!(result.structured.is_none());
    }

    #[test]
    fn test_id_only() {
        let result = FallbackExtractor::new().extract("plain text", ZONE_URL);
        assert_eq!(result.formatted, "Zone Map ID: 10714117");
    }

    #[test]
    fn test_title_only() {
        let result = FallbackExtractor::new()
            .extract("<title>Lobby</title>", "https://example.com/zone?op=view");
        assert_eq!(result.formatted, "Title: Lobby");
    }

    #[test]
    fn test_nothing_found() {
        let result = FallbackExtractor::new().extract("", "https://example.com/");
        assert_eq!(result.formatted, FALLBACK_SUMMARY);
        assert!(result.structured.is_none());
    }

    #[test]
    fn test_non_numeric_id_is_ignored() {
        assert_eq!(zone_id("https://example.com/?id=abc"), None);
        assert_eq!(zone_id("https://example.com/?id=42&x=1"), Some("42"));
    }

    #[test]
    fn test_title_is_lazy_and_single_line() {
        assert_eq!(page_title("<title>One</title><title>Two</title>"), Some("One"));
        assert_eq!(page_title("<title>Split\nTitle</title>"), None);
        assert_eq!(page_title("<title></title>"), Some(""));
        assert_eq!(page_title("<title>Open only"), None);
    }
}
