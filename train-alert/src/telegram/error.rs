//! Telegram client error types.

/// Errors that can occur when sending a notification.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Bot API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
