//! Evaluation outcomes and their rider-facing messages.
//!
//! Every check ends in exactly one `Outcome`. The message templates
//! keep a distinct tone per category: alarm for a cancellation,
//! warning for a delay, confirmation when the train runs on time, and
//! an informational fallback when nothing better is known.

use std::fmt;

use chrono::NaiveTime;

use super::TrainLeg;

/// Classification of the monitored departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainStatus {
    /// Live departure within the tolerated margin of the timetable.
    OnTime,
    /// Live departure more than the tolerated margin behind schedule.
    Delayed { minutes: i64 },
    /// A NO_SERVICE disruption is attached to the trip.
    Cancelled,
    /// No verdict could be derived.
    Unknown { reason: String },
}

/// The result of one check: a status and the rendered alert message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: TrainStatus,
    pub message: String,
}

impl Outcome {
    /// The train is expected to leave on time.
    pub fn on_time(leg: &TrainLeg, target: NaiveTime) -> Self {
        Self {
            status: TrainStatus::OnTime,
            message: format!("✅ {} validé! Bon voyage! 🚄", headline(leg, target)),
        }
    }

    /// The train is expected to leave `minutes` behind schedule.
    pub fn delayed(leg: &TrainLeg, target: NaiveTime, minutes: i64) -> Self {
        Self {
            status: TrainStatus::Delayed { minutes },
            message: format!(
                "⚠️ ALERTE: {} en RETARD de {} minutes! ⏰",
                headline(leg, target),
                minutes
            ),
        }
    }

    /// The trip is cancelled.
    pub fn cancelled(leg: &TrainLeg, target: NaiveTime) -> Self {
        Self {
            status: TrainStatus::Cancelled,
            message: format!("❌ ALERTE: {} ANNULÉ! 😱", headline(leg, target)),
        }
    }

    /// The trip was located but its timing data is unusable.
    pub fn timing_unavailable(leg: &TrainLeg, target: NaiveTime) -> Self {
        Self {
            status: TrainStatus::Unknown {
                reason: "timing unavailable".to_string(),
            },
            message: format!(
                "ℹ️ Statut du train {} {} ({}) non disponible précisément.",
                leg.mode,
                leg.trip_id,
                hhmm(target)
            ),
        }
    }

    /// The monitored trip could not be located at all.
    pub fn journey_not_found(target: NaiveTime, reason: impl fmt::Display) -> Self {
        Self {
            status: TrainStatus::Unknown {
                reason: reason.to_string(),
            },
            message: format!(
                "❓ Impossible de trouver des informations sur le train de {}",
                hhmm(target)
            ),
        }
    }

    /// The check itself failed; best-effort signal so the user is
    /// never left without a reply.
    pub fn check_failed(error: impl fmt::Display) -> Self {
        let reason = error.to_string();
        Self {
            message: format!(
                "⚠️ Erreur lors de la vérification du statut du train: {reason}"
            ),
            status: TrainStatus::Unknown { reason },
        }
    }
}

/// `"{mode} {trip} de {HH:MM} vers {direction}"`, shared by the alert
/// templates.
fn headline(leg: &TrainLeg, target: NaiveTime) -> String {
    format!(
        "{} {} de {} vers {}",
        leg.mode,
        leg.trip_id,
        hhmm(target),
        leg.direction
    )
}

fn hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
