//! Runtime configuration.
//!
//! One explicit struct built from the environment at startup and
//! passed into the core; nothing global, nothing mutable.

use chrono::NaiveTime;

use crate::domain::{InvalidId, LineId, StopId};

/// Monitored departure time when TRAIN_TIME is not set.
const DEFAULT_TRAIN_TIME: &str = "08:40";

/// Errors from reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required variable absent or empty
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    /// Time of day is not HH:MM
    #[error("invalid {name}: {value:?} is not an HH:MM time")]
    InvalidTime { name: &'static str, value: String },

    /// Stop or line id failed validation
    #[error("invalid {name}: {reason}")]
    InvalidId {
        name: &'static str,
        reason: InvalidId,
    },
}

/// Everything the checker needs, validated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Navitia API key.
    pub sncf_api_key: String,
    /// Telegram bot token.
    pub telegram_bot_token: String,
    /// Chat the alert goes to.
    pub telegram_chat_id: String,
    /// Stop area the monitored train leaves from.
    pub departure_stop: StopId,
    /// Intermediate or destination stop area the trip passes through.
    pub intermediate_stop: StopId,
    /// Departure time of the monitored train.
    pub train_time: NaiveTime,
    /// Restrict the search to this line when set.
    pub line: Option<LineId>,
}

impl AppConfig {
    /// Read and validate the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sncf_api_key: required("SNCF_API_KEY")?,
            telegram_bot_token: required("TELEGRAM_BOT_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            departure_stop: stop("DEPARTURE_STATION_CODE")?,
            intermediate_stop: stop("INTERMEDIATE_STATION_CODE")?,
            train_time: train_time()?,
            line: line_filter()?,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn stop(name: &'static str) -> Result<StopId, ConfigError> {
    let value = required(name)?;
    StopId::parse(&value).map_err(|reason| ConfigError::InvalidId { name, reason })
}

fn train_time() -> Result<NaiveTime, ConfigError> {
    let value =
        std::env::var("TRAIN_TIME").unwrap_or_else(|_| DEFAULT_TRAIN_TIME.to_string());
    parse_train_time(&value)
}

/// Parse an HH:MM time of day.
fn parse_train_time(value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ConfigError::InvalidTime {
        name: "TRAIN_TIME",
        value: value.to_string(),
    })
}

/// An empty LINE_CODE counts as unset.
fn line_filter() -> Result<Option<LineId>, ConfigError> {
    match std::env::var("LINE_CODE") {
        Ok(value) if !value.is_empty() => {
            let line = LineId::parse(&value)
                .map_err(|reason| ConfigError::InvalidId {
                    name: "LINE_CODE",
                    reason,
                })?;
            Ok(Some(line))
        }
        _ => Ok(None),
    }
}
