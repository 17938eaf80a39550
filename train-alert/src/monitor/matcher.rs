//! Journey matching.
//!
//! Locates the one public transport leg that corresponds to the
//! monitored trip among the itineraries returned by the journey
//! search.

use chrono::NaiveTime;

use crate::domain::{TrainLeg, TripQuery};
use crate::navitia::{NavitiaClient, NavitiaError, public_transport_legs};

/// Reasons the monitored trip could not be located.
///
/// All variants are recoverable: the caller downgrades them to an
/// Unknown outcome instead of aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The journey search returned a non-success response.
    #[error("upstream error: {0}")]
    Upstream(#[source] NavitiaError),

    /// The request never completed (network failure, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] NavitiaError),

    /// The search succeeded but matched no itinerary.
    #[error("no journeys")]
    NoJourneys,

    /// No itinerary contained a public transport section.
    #[error("no matching section")]
    NoMatchingSection,
}

impl From<NavitiaError> for MatchError {
    fn from(error: NavitiaError) -> Self {
        if error.is_transport() {
            MatchError::Transport(error)
        } else {
            MatchError::Upstream(error)
        }
    }
}

/// Locates the monitored trip in journey search results.
pub struct JourneyMatcher<'a> {
    client: &'a NavitiaClient,
}

impl<'a> JourneyMatcher<'a> {
    /// Create a matcher over the given client.
    pub fn new(client: &'a NavitiaClient) -> Self {
        Self { client }
    }

    /// Issue one search and select the leg for the monitored trip.
    pub async fn find(&self, query: &TripQuery) -> Result<TrainLeg, MatchError> {
        let response = self.client.journeys(query).await?;

        if response.journeys.is_empty() {
            return Err(MatchError::NoJourneys);
        }

        let legs = public_transport_legs(&response.journeys);

        select_leg(&legs, query.target_time())
            .cloned()
            .ok_or(MatchError::NoMatchingSection)
    }
}

/// Selection policy for the monitored trip.
///
/// A leg whose live departure reads exactly the target `HH:MM` wins
/// over any earlier candidate; failing that, the first public
/// transport leg is returned, so a large delay that shifts the
/// displayed time still produces an informative reply.
pub(crate) fn select_leg(legs: &[TrainLeg], target: NaiveTime) -> Option<&TrainLeg> {
    legs.iter()
        .find(|leg| leg.departs_at(target))
        .or_else(|| legs.first())
}
