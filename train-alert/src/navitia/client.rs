//! Navitia journeys HTTP client.
//!
//! Provides an async method for querying the SNCF journey search.
//! Handles authentication and decoding into response DTOs.

use crate::domain::{TransitTime, TripQuery};

use super::error::NavitiaError;
use super::types::JourneysResponse;

/// Default base URL for the SNCF Navitia coverage.
const DEFAULT_BASE_URL: &str = "https://api.sncf.com/v1/coverage/sncf";

/// Default number of itineraries requested per search.
const DEFAULT_JOURNEY_COUNT: u8 = 4;

/// Configuration for the Navitia client.
#[derive(Debug, Clone)]
pub struct NavitiaConfig {
    /// API key, sent as the basic auth username.
    pub api_key: String,
    /// Base URL for the coverage (defaults to production SNCF).
    pub base_url: String,
    /// Number of itineraries to request per search.
    pub journey_count: u8,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl NavitiaConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            journey_count: DEFAULT_JOURNEY_COUNT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the number of itineraries requested per search.
    pub fn with_journey_count(mut self, count: u8) -> Self {
        self.journey_count = count;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Navitia journeys API client.
#[derive(Debug, Clone)]
pub struct NavitiaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    journey_count: u8,
}

impl NavitiaClient {
    /// Create a new Navitia client with the given configuration.
    pub fn new(config: NavitiaConfig) -> Result<Self, NavitiaError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            journey_count: config.journey_count,
        })
    }

    /// Search itineraries for the given trip.
    ///
    /// Issues a single `journeys` request for departures at or after
    /// the query instant, with realtime freshness and a bounded result
    /// count. When the query carries a line filter, the search is
    /// restricted to trips on that line.
    pub async fn journeys(&self, query: &TripQuery) -> Result<JourneysResponse, NavitiaError> {
        let url = format!("{}/journeys", self.base_url);

        let mut params = vec![
            ("from", query.from.as_str().to_string()),
            ("to", query.to.as_str().to_string()),
            (
                "datetime",
                query.departure.format(TransitTime::WIRE_FORMAT).to_string(),
            ),
            ("datetime_represents", "departure".to_string()),
            ("data_freshness", "realtime".to_string()),
            ("count", self.journey_count.to_string()),
            ("disable_geojson", "true".to_string()),
        ];

        if let Some(line) = &query.line {
            params.push(("allowed_id[]", line.as_str().to_string()));
        }

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, Some(""))
            .query(&params)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(NavitiaError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NavitiaError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NavitiaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| NavitiaError::Json {
            message: format!("{} (body: {})", e, body.chars().take(500).collect::<String>()),
        })
    }
}
