//! The matched train leg.

use chrono::NaiveTime;

use super::TransitTime;

/// Disruption link type marking a cancelled trip.
pub const NO_SERVICE: &str = "NO_SERVICE";

/// One public transport leg of an itinerary, decoupled from the wire
/// format.
///
/// Display fields carry rider-facing fallbacks applied during
/// conversion, so rendering code never deals with missing labels.
/// Timestamps stay optional: the provider can omit them, and a
/// malformed wire value is treated the same as an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainLeg {
    /// Planned timetable departure.
    pub scheduled_departure: Option<TransitTime>,
    /// Live departure, including any delay.
    pub realtime_departure: Option<TransitTime>,
    /// Types of `disruptions` links attached to the section.
    pub disruption_types: Vec<String>,
    /// Commercial mode, e.g. "TER".
    pub mode: String,
    /// Headsign or trip short name.
    pub trip_id: String,
    /// Rider-facing destination label.
    pub direction: String,
}

impl TrainLeg {
    /// True if the live departure falls in the given minute of the day.
    pub fn departs_at(&self, time_of_day: NaiveTime) -> bool {
        self.realtime_departure.is_some_and(|t| t.is_at(time_of_day))
    }

    /// True if a NO_SERVICE disruption is attached.
    pub fn has_no_service(&self) -> bool {
        self.disruption_types.iter().any(|t| t == NO_SERVICE)
    }
}
