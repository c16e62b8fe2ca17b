//! API client error types

use thiserror::Error;

/// Errors produced by backend API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success API response
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Session token whose payload segment cannot be decoded
    #[error("Malformed session token: {0}")]
    MalformedToken(String),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
