//! OpenRouter client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenRouterError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty response from completion service")]
    EmptyResponse,
}

impl From<reqwest::Error> for OpenRouterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenRouterError::Timeout
        } else {
            OpenRouterError::Network(err)
        }
    }
}
