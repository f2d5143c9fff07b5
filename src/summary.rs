use crate::record::MapRecord;

/// Delimiter between summary parts.
pub const SUMMARY_SEPARATOR: &str = " | ";

/// Summary used when a record has none of the displayed fields.
pub const EMPTY_RECORD_SUMMARY: &str = "FunZone details available";

/// Build the one-line display summary for a zone record.
///
/// Parts appear in a fixed order and only when their field is non-empty:
/// title, location (with `, region` when both are set), environment, weather,
/// zone owner, description. Image URLs and identifiers never appear.
pub fn format_summary(record: &MapRecord) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(6);

    if !record.title.is_empty() {
        parts.push(record.title.clone());
    }

    if !record.location.is_empty() {
        let mut location = record.location.clone();
        if !record.region.is_empty() {
            location.push_str(", ");
            location.push_str(&record.region);
        }
        parts.push(location);
    }

    let labelled = [
        ("Environment", &record.environment),
        ("Weather", &record.weather),
        ("Zone Owner", &record.owner),
        ("Description", &record.description),
    ];
    for (label, value) in labelled {
        if !value.is_empty() {
            parts.push(format!("{}: {}", label, value));
        }
    }

    join_parts(parts, EMPTY_RECORD_SUMMARY)
}

/// Join summary parts, substituting `placeholder` when there are none.
pub(crate) fn join_parts(parts: Vec<String>, placeholder: &str) -> String {
    if parts.is_empty() {
        placeholder.to_string()
    } else {
        parts.join(SUMMARY_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> MapRecord {
        MapRecord {
            title: "Sunset Plaza".to_string(),
            description: "A place to watch the sun go down".to_string(),
            location: "Kilo Island".to_string(),
            region: "North".to_string(),
            environment: "Beach".to_string(),
            weather: "Clear".to_string(),
            image_url: "https://example.com/image.jpg".to_string(),
            map_image_url: "https://example.com/map.jpg".to_string(),
            owner: "Zed".to_string(),
            owner_id: "12345".to_string(),
            oid: "10714117".to_string(),
        }
    }

    #[test]
    fn test_full_record_summary() {
        assert_eq!(
            format_summary(&full_record()),
            "Sunset Plaza | Kilo Island, North | Environment: Beach | Weather: Clear | \
             Zone Owner: Zed | Description: A place to watch the sun go down"
        );
    }

    #[test]
    fn test_empty_record_uses_placeholder() {
        assert_eq!(format_summary(&MapRecord::default()), EMPTY_RECORD_SUMMARY);
    }

    #[test]
    fn test_hidden_fields_never_appear() {
        let record = MapRecord {
            image_url: "https://example.com/image.jpg".to_string(),
            map_image_url: "https://example.com/map.jpg".to_string(),
            owner_id: "12345".to_string(),
            oid: "10714117".to_string(),
            ..Default::default()
        };
        assert_eq!(format_summary(&record), EMPTY_RECORD_SUMMARY);
    }

    #[test]
    fn test_location_without_region_has_no_trailing_comma() {
        let record = MapRecord {
            title: "Sunset Plaza".to_string(),
            location: "Kilo Island".to_string(),
            ..Default::default()
        };
        assert_eq!(format_summary(&record), "Sunset Plaza | Kilo Island");
    }

    #[test]
    fn test_region_without_location_is_dropped() {
        let record = MapRecord {
            region: "North".to_string(),
            weather: "Rain".to_string(),
            ..Default::default()
        };
        assert_eq!(format_summary(&record), "Weather: Rain");
    }

    #[test]
    fn test_summary_is_deterministic() {
        let record = full_record();
        assert_eq!(format_summary(&record), format_summary(&record.clone()));
    }

    #[test]
    fn test_join_parts() {
        assert_eq!(join_parts(vec![], "none"), "none");
        assert_eq!(
            join_parts(vec!["a".to_string(), "b".to_string()], "none"),
            "a | b"
        );
    }
}
