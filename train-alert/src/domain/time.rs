//! Wire timestamp handling for the Navitia API.
//!
//! Navitia returns local datetimes as `YYYYMMDDTHHMMSS` strings. This
//! module wraps them in a parsed form that keeps the full instant
//! while displaying as the rider-facing `HH:MM`.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid wire timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

/// A departure or arrival instant in the Navitia wire format.
///
/// # Examples
///
/// ```
/// use train_alert::domain::TransitTime;
///
/// let t = TransitTime::parse("20240101T084000").unwrap();
/// assert_eq!(t.to_string(), "08:40");
///
/// // ISO separators are not the wire format
/// assert!(TransitTime::parse("2024-01-01T08:40:00").is_err());
/// assert!(TransitTime::parse("").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitTime {
    datetime: NaiveDateTime,
}

impl TransitTime {
    /// The wire datetime format, shared with outbound query parameters.
    pub const WIRE_FORMAT: &'static str = "%Y%m%dT%H%M%S";

    /// Create a TransitTime from an already-parsed datetime.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self { datetime }
    }

    /// Parse a `YYYYMMDDTHHMMSS` wire timestamp.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // The wire format is fixed-width: 8 date digits, 'T', 6 time digits
        if s.len() != 15 {
            return Err(TimeError {
                reason: "expected YYYYMMDDTHHMMSS",
            });
        }

        let datetime = NaiveDateTime::parse_from_str(s, Self::WIRE_FORMAT).map_err(|_| {
            TimeError {
                reason: "not a valid datetime",
            }
        })?;

        Ok(Self { datetime })
    }

    /// Returns the full instant.
    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    /// True if this instant falls in the given minute of the day.
    ///
    /// Seconds are ignored: riders read departures at `HH:MM`
    /// precision, and so does the matching policy.
    pub fn is_at(&self, time_of_day: NaiveTime) -> bool {
        self.hour() == time_of_day.hour() && self.minute() == time_of_day.minute()
    }

    /// Returns the duration between two instants.
    ///
    /// Negative when `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.datetime.signed_duration_since(other.datetime)
    }
}

impl fmt::Debug for TransitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransitTime({} {:02}:{:02})",
            self.datetime.date(),
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for TransitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
