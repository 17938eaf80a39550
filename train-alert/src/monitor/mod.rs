//! The departure check core.
//!
//! `JourneyMatcher` locates the monitored trip in the journey search
//! results and `evaluate` classifies it. `check_departure` wires the
//! two together for a single run, converting every matcher failure
//! into an informative fallback outcome.

mod evaluator;
mod matcher;

pub use evaluator::{DELAY_THRESHOLD_MINUTES, evaluate};
pub use matcher::{JourneyMatcher, MatchError};

use tracing::{info, warn};

use crate::domain::{Outcome, TripQuery};
use crate::navitia::NavitiaClient;

/// Run one check: match the monitored trip, then classify it.
///
/// Never fails; a trip that cannot be located yields an Unknown
/// outcome, so the caller always has something to send.
pub async fn check_departure(client: &NavitiaClient, query: &TripQuery) -> Outcome {
    let matcher = JourneyMatcher::new(client);

    match matcher.find(query).await {
        Ok(leg) => {
            info!(trip = %leg.trip_id, direction = %leg.direction, "matched monitored trip");
            evaluate(&leg, query.target_time())
        }
        Err(error) => {
            warn!(%error, "could not locate the monitored trip");
            Outcome::journey_not_found(query.target_time(), &error)
        }
    }
}
