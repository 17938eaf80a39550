//! Navitia API response DTOs.
//!
//! These types map directly to the Navitia `journeys` JSON responses.
//! They use `Option` liberally because Navitia omits fields depending
//! on coverage, data freshness, and section kind.

use serde::Deserialize;

/// Response from the `journeys` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneysResponse {
    /// Itineraries, best first. Absent when the search matched nothing.
    #[serde(default)]
    pub journeys: Vec<Journey>,
}

/// One itinerary from origin to destination.
#[derive(Debug, Clone, Deserialize)]
pub struct Journey {
    /// Ordered legs of the itinerary.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// What kind of leg this is; only public transport legs carry a
    /// train.
    #[serde(rename = "type")]
    pub section_type: SectionType,

    /// Live departure, `YYYYMMDDTHHMMSS`.
    pub departure_date_time: Option<String>,

    /// Timetabled departure, `YYYYMMDDTHHMMSS`.
    pub base_departure_date_time: Option<String>,

    /// Rider-facing labels and disruption links.
    pub display_informations: Option<DisplayInformations>,
}

/// Section kind.
///
/// Everything that is not public transport (walking, waiting,
/// transfers, ...) is collapsed into `Other`; those legs are never
/// evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    PublicTransport,
    #[serde(other)]
    Other,
}

/// Rider-facing labels for a section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayInformations {
    /// Commercial mode, e.g. "TER".
    pub commercial_mode: Option<String>,

    /// Rider-facing trip label.
    pub headsign: Option<String>,

    /// Trip short name, often the train number.
    pub trip_short_name: Option<String>,

    /// Destination shown on the train.
    pub direction: Option<String>,

    /// Related objects; disruptions use `rel == "disruptions"`.
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A related-object link on the display information.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    /// Relation kind, e.g. "disruptions".
    pub rel: Option<String>,

    /// Object type; for disruption links this is the effect, e.g.
    /// "NO_SERVICE".
    #[serde(rename = "type")]
    pub link_type: Option<String>,

    /// Object id.
    pub id: Option<String>,
}
