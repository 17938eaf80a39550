//! Status classification.
//!
//! Pure function of the matched leg: cancellation first, then the
//! delay computation, with Unknown as the universal fallback.

use chrono::NaiveTime;

use crate::domain::{Outcome, TrainLeg};

/// Delays of at most this many whole minutes still count as on time.
pub const DELAY_THRESHOLD_MINUTES: i64 = 5;

/// Classify the monitored leg.
///
/// Cancellation takes priority over any timing data. The delay is the
/// whole-minute difference between live and timetabled departure,
/// truncated toward zero; the threshold is strict, so a delay of
/// exactly five minutes still reads as on time. A missing timestamp
/// on either side yields Unknown rather than an error.
pub fn evaluate(leg: &TrainLeg, target: NaiveTime) -> Outcome {
    if leg.has_no_service() {
        return Outcome::cancelled(leg, target);
    }

    match (leg.scheduled_departure, leg.realtime_departure) {
        (Some(scheduled), Some(realtime)) => {
            let minutes = realtime.signed_duration_since(scheduled).num_minutes();
            if minutes > DELAY_THRESHOLD_MINUTES {
                Outcome::delayed(leg, target, minutes)
            } else {
                Outcome::on_time(leg, target)
            }
        }
        _ => Outcome::timing_unavailable(leg, target),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{NO_SERVICE, TrainStatus, TransitTime};
    use chrono::Duration;
    use proptest::prelude::*;

    fn leg_with_delay(delay_secs: i64, disruption_types: Vec<String>) -> TrainLeg {
        let scheduled = TransitTime::parse("20240315T080000").unwrap();
        let realtime = TransitTime::new(scheduled.datetime() + Duration::seconds(delay_secs));

        TrainLeg {
            scheduled_departure: Some(scheduled),
            realtime_departure: Some(realtime),
            disruption_types,
            mode: "TER".to_string(),
            trip_id: "865523".to_string(),
            direction: "Libourne".to_string(),
        }
    }

    fn target() -> NaiveTime {
        NaiveTime::from_hms_opt(8, 0, 0).unwrap()
    }

    proptest! {
        /// Property: with both timestamps present and no disruption,
        /// classification follows the truncated-minute threshold.
        #[test]
        fn classification_matches_truncated_minutes(delay_secs in -3_600i64..36_000) {
            let outcome = evaluate(&leg_with_delay(delay_secs, Vec::new()), target());
            let minutes = delay_secs / 60;

            match outcome.status {
                TrainStatus::Delayed { minutes: reported } => {
                    prop_assert!(minutes > DELAY_THRESHOLD_MINUTES);
                    prop_assert_eq!(reported, minutes);
                }
                TrainStatus::OnTime => prop_assert!(minutes <= DELAY_THRESHOLD_MINUTES),
                other => prop_assert!(false, "unexpected status: {:?}", other),
            }
        }

        /// Property: a NO_SERVICE disruption cancels for any timing.
        #[test]
        fn no_service_always_cancels(delay_secs in -3_600i64..36_000) {
            let leg = leg_with_delay(delay_secs, vec![NO_SERVICE.to_string()]);
            let outcome = evaluate(&leg, target());

            prop_assert_eq!(outcome.status, TrainStatus::Cancelled);
        }
    }
}
