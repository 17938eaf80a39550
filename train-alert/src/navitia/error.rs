//! Navitia client error types.

/// Errors that can occur when querying the Navitia API.
#[derive(Debug, thiserror::Error)]
pub enum NavitiaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check SNCF_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the Navitia API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl NavitiaError {
    /// True when the request never reached the API.
    pub fn is_transport(&self) -> bool {
        matches!(self, NavitiaError::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NavitiaError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: check SNCF_API_KEY");

        let err = NavitiaError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = NavitiaError::Json {
            message: "expected struct JourneysResponse".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }

    #[test]
    fn api_errors_are_not_transport() {
        assert!(
            !NavitiaError::Api {
                status: 503,
                message: String::new()
            }
            .is_transport()
        );
        assert!(!NavitiaError::Unauthorized.is_transport());
        assert!(!NavitiaError::RateLimited.is_transport());
    }
}
