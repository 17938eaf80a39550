//! SNCF Navitia journeys client.
//!
//! This module provides an HTTP client for the `journeys` endpoint of
//! the Navitia API exposed under the SNCF coverage, which returns
//! itineraries with realtime departure data.
//!
//! Key characteristics of Navitia:
//! - datetimes are `YYYYMMDDTHHMMSS` strings in coverage-local time
//! - a journey is an ordered list of sections; only
//!   `public_transport` sections describe an actual train
//! - disruptions appear as `links` entries with `rel == "disruptions"`
//!   on a section's display information

mod client;
mod convert;
mod error;
mod types;

pub use client::{NavitiaClient, NavitiaConfig};
pub use convert::public_transport_legs;
pub use error::NavitiaError;
pub use types::{DisplayInformations, Journey, JourneysResponse, Link, Section, SectionType};
