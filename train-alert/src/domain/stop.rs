//! Navitia object identifier types.

use std::fmt;

/// Error returned when parsing an invalid object id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid object id: {reason}")]
pub struct InvalidId {
    reason: &'static str,
}

/// A stop area identifier, e.g. `stop_area:SNCF:87581009`.
///
/// Ids are opaque provider strings; this type only guarantees the
/// value is non-empty and free of whitespace, so it can be passed as a
/// query parameter untouched.
///
/// # Examples
///
/// ```
/// use train_alert::domain::StopId;
///
/// let bordeaux = StopId::parse("stop_area:SNCF:87581009").unwrap();
/// assert_eq!(bordeaux.as_str(), "stop_area:SNCF:87581009");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("stop area:SNCF:87581009").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop area id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        validate(s)?;
        Ok(StopId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line identifier, e.g. `line:SNCF:TER-33:`.
///
/// Used as an `allowed_id[]` constraint to restrict the journey search
/// to trips on one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        validate(s)?;
        Ok(LineId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate(s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            reason: "must not be empty",
        });
    }

    if s.chars().any(char::is_whitespace) {
        return Err(InvalidId {
            reason: "must not contain whitespace",
        });
    }

    Ok(())
}
