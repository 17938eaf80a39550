//! The monitored trip.

use chrono::{NaiveDateTime, NaiveTime};

use super::{LineId, StopId};

/// Everything needed to search for the monitored departure.
///
/// Built once per run from the configuration and today's date,
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    /// Stop area the train leaves from.
    pub from: StopId,
    /// Stop area the monitored trip must pass through or reach.
    pub to: StopId,
    /// Target departure instant; the search asks for departures at or
    /// after this point.
    pub departure: NaiveDateTime,
    /// Restrict the search to this line when set.
    pub line: Option<LineId>,
}

impl TripQuery {
    /// Create a query for one monitored departure.
    pub fn new(
        from: StopId,
        to: StopId,
        departure: NaiveDateTime,
        line: Option<LineId>,
    ) -> Self {
        Self {
            from,
            to,
            departure,
            line,
        }
    }

    /// Time of day the monitored train is due to leave.
    pub fn target_time(&self) -> NaiveTime {
        self.departure.time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn target_time_is_time_of_day() {
        let departure = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(8, 40, 0)
            .unwrap();

        let query = TripQuery::new(
            StopId::parse("stop_area:SNCF:87581009").unwrap(),
            StopId::parse("stop_area:SNCF:87584102").unwrap(),
            departure,
            None,
        );

        assert_eq!(query.target_time(), NaiveTime::from_hms_opt(8, 40, 0).unwrap());
    }
}
