//! Zone record types
//!
//! [`MapRecord`] is the structured view of one FunZone; [`ScrapeResult`] pairs it
//! with the display summary handed back to callers.

use serde::{Deserialize, Serialize, Serializer};

/// Summary used by the command-line boundary when a scrape produced nothing.
pub const UNAVAILABLE_SUMMARY: &str = "Map information available - View in There for full details";

/// Structured FunZone metadata. Absent fields are empty strings, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapRecord {
    pub title: String,
    pub description: String,
    pub location: String,
    pub region: String,
    pub environment: String,
    pub weather: String,
    pub image_url: String,
    pub map_image_url: String,
    pub owner: String,
    pub owner_id: String,
    pub oid: String,
}

impl MapRecord {
    /// Field names in serialization order.
    pub const FIELD_NAMES: [&'static str; 11] = [
        "title",
        "description",
        "location",
        "region",
        "environment",
        "weather",
        "image_url",
        "map_image_url",
        "owner",
        "owner_id",
        "oid",
    ];

    /// Copy of this record with every field passed through [`normalize_field`].
    pub fn normalized(&self) -> Self {
        let trim = |value: &str| normalize_field(Some(value));
        Self {
            title: trim(&self.title),
            description: trim(&self.description),
            location: trim(&self.location),
            region: trim(&self.region),
            environment: trim(&self.environment),
            weather: trim(&self.weather),
            image_url: trim(&self.image_url),
            map_image_url: trim(&self.map_image_url),
            owner: trim(&self.owner),
            owner_id: trim(&self.owner_id),
            oid: trim(&self.oid),
        }
    }
}

/// Absent text becomes `""`; present text loses surrounding whitespace.
pub fn normalize_field(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// A completed scrape: display summary plus, when available, the structured record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeResult {
    pub formatted: String,
    #[serde(serialize_with = "serialize_structured")]
    pub structured: Option<MapRecord>,
}

impl ScrapeResult {
    pub fn new(formatted: String, structured: Option<MapRecord>) -> Self {
        Self {
            formatted,
            structured,
        }
    }

    /// The payload emitted when no extraction succeeded at all.
    pub fn unavailable() -> Self {
        Self::new(UNAVAILABLE_SUMMARY.to_string(), None)
    }

    pub fn is_structured(&self) -> bool {
        self.structured.is_some()
    }
}

// `None` is written as an empty JSON object rather than `null`.
fn serialize_structured<S>(record: &Option<MapRecord>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;

    match record {
        Some(record) => record.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
