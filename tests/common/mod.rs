#![allow(dead_code)]

pub mod mocks;

/// Zone URL in the form the tournament admin pastes in
pub const ZONE_URL: &str = "https://webapps.prod.there.com/funzone/funzone?op=view&id=10714117";

pub const FULL_ZONE_XML: &str = include_str!("../fixtures/full_zone.xml");
pub const PARTIAL_ZONE_XML: &str = include_str!("../fixtures/partial_zone.xml");
pub const MARKER_WITHOUT_ZONE_XML: &str = include_str!("../fixtures/marker_without_zone.xml");
pub const MALFORMED_ZONE_XML: &str = include_str!("../fixtures/malformed_zone.xml");
pub const FALLBACK_PAGE_HTML: &str = include_str!("../fixtures/fallback_page.html");
