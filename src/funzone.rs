//! FunZone XML extraction
//!
//! Documents served for a FunZone look like:
//!
//! ```xml
//! <FunZoneDetail>
//!   <FunZone>
//!     <UserTitle>Sunset Plaza</UserTitle>
//!     <Location>Kilo Island</Location>
//!     ...
//!   </FunZone>
//!   <Operator>
//!     <Name>Zed</Name>
//!     <Doid>12345</Doid>
//!   </Operator>
//! </FunZoneDetail>
//! ```
//!
//! Only the `FunZone` element is mandatory. Every other element may be missing
//! and resolves to an empty field.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{Result, ScrapeError};
use crate::record::MapRecord;

/// Literal token whose presence marks a document as a FunZone detail document.
pub const FUNZONE_MARKER: &str = "<FunZoneDetail>";

const FUNZONE_ELEMENT: &str = "FunZone";
const OPERATOR_ELEMENT: &str = "Operator";

/// Field extractor for documents carrying [`FUNZONE_MARKER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FunZoneExtractor;

impl FunZoneExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Whether `content` has the shape this extractor understands.
    pub fn recognizes(content: &str) -> bool {
        content.contains(FUNZONE_MARKER)
    }

    /// Parse `content` and read the zone fields.
    ///
    /// Fails with [`ScrapeError::MalformedDocument`] when the XML is not
    /// well-formed and [`ScrapeError::IncompleteDocument`] when it has no
    /// `FunZone` element. Missing child elements are not errors.
    pub fn extract(&self, content: &str) -> Result<MapRecord> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(content, options)?;

        let zone = find_descendant(&document, FUNZONE_ELEMENT).ok_or_else(|| {
            ScrapeError::IncompleteDocument {
                details: format!("no <{}> element found", FUNZONE_ELEMENT),
            }
        })?;
        let operator = find_descendant(&document, OPERATOR_ELEMENT);

        let zone_text = |name| child_text(Some(zone), name);
        let operator_text = |name| child_text(operator, name);

        Ok(MapRecord {
            title: zone_text("UserTitle"),
            description: zone_text("UserDesc"),
            location: zone_text("Location"),
            region: zone_text("Region"),
            environment: zone_text("PhysEnvName"),
            weather: zone_text("WeatherName"),
            image_url: zone_text("ImageUrl"),
            map_image_url: zone_text("MapUrl"),
            owner: operator_text("Name"),
            owner_id: operator_text("Doid"),
            oid: zone_text("Oid"),
        })
    }
}

/// First element below the root element (the root itself excluded) named `name`.
fn find_descendant<'a, 'input>(
    document: &'a Document<'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    document
        .root_element()
        .descendants()
        .skip(1)
        .find(|node| node.is_element() && node.tag_name().name() == name)
}

/// Text of the first direct child element named `name`, or `""`.
///
/// Text nodes are joined up to the first nested element; comments and
/// processing instructions in between are skipped.
fn child_text(parent: Option<Node<'_, '_>>, name: &str) -> String {
    parent
        .and_then(|node| {
            node.children()
                .find(|child| child.is_element() && child.tag_name().name() == name)
        })
        .map(|child| {
            child
                .children()
                .take_while(|node| !node.is_element())
                .filter(|node| node.is_text())
                .filter_map(|node| node.text())
                .collect::<String>()
        })
        .unwrap_or_default()
}
