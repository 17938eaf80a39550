//! Conversion from Navitia DTOs to domain types.
//!
//! Raw sections become `TrainLeg`s here: wire timestamps are parsed
//! into an explicit present-or-absent form, disruption links are
//! collected, and rider-facing labels get their fallbacks.

use crate::domain::{TrainLeg, TransitTime};

use super::types::{DisplayInformations, Journey, Section, SectionType};

/// Label used when neither headsign nor trip short name is known.
const UNKNOWN_TRIP: &str = "Inconnu";

/// Label used when the commercial mode is unknown.
const UNKNOWN_MODE: &str = "Train";

/// Label used when the destination is unknown.
const UNKNOWN_DIRECTION: &str = "destination inconnue";

/// Extract the public transport legs of all journeys.
///
/// Received order is preserved across journeys and across the sections
/// within each journey, so selection policies can rely on it.
pub fn public_transport_legs(journeys: &[Journey]) -> Vec<TrainLeg> {
    journeys
        .iter()
        .flat_map(|journey| journey.sections.iter())
        .filter(|section| section.section_type == SectionType::PublicTransport)
        .map(to_train_leg)
        .collect()
}

/// Convert a single public transport section.
///
/// Never fails: a missing or malformed timestamp becomes `None`, and
/// missing labels fall back to rider-facing placeholders.
fn to_train_leg(section: &Section) -> TrainLeg {
    let info = section.display_informations.as_ref();

    TrainLeg {
        scheduled_departure: parse_departure(section.base_departure_date_time.as_deref()),
        realtime_departure: parse_departure(section.departure_date_time.as_deref()),
        disruption_types: disruption_types(info),
        mode: label(info.and_then(|i| i.commercial_mode.as_deref()), UNKNOWN_MODE),
        trip_id: trip_label(info),
        direction: label(info.and_then(|i| i.direction.as_deref()), UNKNOWN_DIRECTION),
    }
}

fn parse_departure(wire: Option<&str>) -> Option<TransitTime> {
    wire.and_then(|s| TransitTime::parse(s).ok())
}

/// Types of `disruptions` links, in received order.
fn disruption_types(info: Option<&DisplayInformations>) -> Vec<String> {
    info.map(|i| {
        i.links
            .iter()
            .filter(|link| link.rel.as_deref() == Some("disruptions"))
            .filter_map(|link| link.link_type.clone())
            .collect()
    })
    .unwrap_or_default()
}

/// Headsign if present, else trip short name, else the unknown label.
fn trip_label(info: Option<&DisplayInformations>) -> String {
    let headsign = info
        .and_then(|i| i.headsign.as_deref())
        .filter(|s| !s.is_empty());
    let short_name = info.and_then(|i| i.trip_short_name.as_deref());

    label(headsign.or(short_name), UNKNOWN_TRIP)
}

fn label(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navitia::types::Link;

    fn make_section(
        base: Option<&str>,
        departure: Option<&str>,
        info: Option<DisplayInformations>,
    ) -> Section {
        Section {
            section_type: SectionType::PublicTransport,
            departure_date_time: departure.map(str::to_string),
            base_departure_date_time: base.map(str::to_string),
            display_informations: info,
        }
    }

    fn make_info(headsign: Option<&str>, short_name: Option<&str>) -> DisplayInformations {
        DisplayInformations {
            commercial_mode: Some("TER".to_string()),
            headsign: headsign.map(str::to_string),
            trip_short_name: short_name.map(str::to_string),
            direction: Some("Libourne".to_string()),
            links: Vec::new(),
        }
    }

    fn make_link(rel: &str, link_type: &str) -> Link {
        Link {
            rel: Some(rel.to_string()),
            link_type: Some(link_type.to_string()),
            id: None,
        }
    }

    fn walking_section() -> Section {
        Section {
            section_type: SectionType::Other,
            departure_date_time: None,
            base_departure_date_time: None,
            display_informations: None,
        }
    }

    #[test]
    fn keeps_only_public_transport_in_order() {
        let journeys = vec![
            Journey {
                sections: vec![
                    walking_section(),
                    make_section(
                        Some("20240315T084100"),
                        Some("20240315T084100"),
                        Some(make_info(Some("865521"), None)),
                    ),
                ],
            },
            Journey {
                sections: vec![make_section(
                    Some("20240315T084000"),
                    Some("20240315T084000"),
                    Some(make_info(Some("865523"), None)),
                )],
            },
        ];

        let legs = public_transport_legs(&journeys);

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].trip_id, "865521");
        assert_eq!(legs[1].trip_id, "865523");
    }

    #[test]
    fn parses_both_departure_timestamps() {
        let section = make_section(
            Some("20240315T084000"),
            Some("20240315T084700"),
            Some(make_info(Some("865523"), None)),
        );

        let legs = public_transport_legs(&[Journey {
            sections: vec![section],
        }]);
        let leg = &legs[0];

        assert_eq!(leg.scheduled_departure.unwrap().to_string(), "08:40");
        assert_eq!(leg.realtime_departure.unwrap().to_string(), "08:47");
    }

    #[test]
    fn malformed_timestamp_becomes_none() {
        let section = make_section(
            Some("not-a-timestamp"),
            Some("20240315T084700"),
            Some(make_info(Some("865523"), None)),
        );

        let legs = public_transport_legs(&[Journey {
            sections: vec![section],
        }]);

        assert!(legs[0].scheduled_departure.is_none());
        assert!(legs[0].realtime_departure.is_some());
    }

    #[test]
    fn missing_labels_fall_back() {
        let section = make_section(Some("20240315T084000"), Some("20240315T084000"), None);

        let legs = public_transport_legs(&[Journey {
            sections: vec![section],
        }]);
        let leg = &legs[0];

        assert_eq!(leg.mode, "Train");
        assert_eq!(leg.trip_id, "Inconnu");
        assert_eq!(leg.direction, "destination inconnue");
    }

    #[test]
    fn empty_headsign_falls_back_to_short_name() {
        let section = make_section(
            None,
            None,
            Some(make_info(Some(""), Some("865523"))),
        );

        let legs = public_transport_legs(&[Journey {
            sections: vec![section],
        }]);

        assert_eq!(legs[0].trip_id, "865523");
    }

    #[test]
    fn headsign_wins_over_short_name() {
        let section = make_section(None, None, Some(make_info(Some("1A23"), Some("865523"))));

        let legs = public_transport_legs(&[Journey {
            sections: vec![section],
        }]);

        assert_eq!(legs[0].trip_id, "1A23");
    }

    #[test]
    fn collects_only_disruption_links() {
        let mut info = make_info(Some("865523"), None);
        info.links = vec![
            make_link("terminus", "stop_area"),
            make_link("disruptions", "NO_SERVICE"),
            make_link("disruptions", "SIGNIFICANT_DELAYS"),
        ];

        let section = make_section(None, None, Some(info));
        let legs = public_transport_legs(&[Journey {
            sections: vec![section],
        }]);

        assert_eq!(
            legs[0].disruption_types,
            vec!["NO_SERVICE".to_string(), "SIGNIFICANT_DELAYS".to_string()]
        );
    }

    #[test]
    fn no_public_transport_yields_no_legs() {
        let journeys = vec![Journey {
            sections: vec![walking_section(), walking_section()],
        }];

        assert!(public_transport_legs(&journeys).is_empty());
    }
}
