//! Error handling module
//!
//! This module provides centralized error handling for the application.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider rejected the request ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Payment system could not load: {0}")]
    WidgetUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::Validation(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::Json(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => warp::http::StatusCode::NOT_FOUND,
            AppError::RateLimit => warp::http::StatusCode::TOO_MANY_REQUESTS,
            AppError::Provider { .. } => warp::http::StatusCode::BAD_GATEWAY,
            AppError::Transport(_) => warp::http::StatusCode::BAD_GATEWAY,
            AppError::Timeout(_) => warp::http::StatusCode::GATEWAY_TIMEOUT,
            AppError::WidgetUnavailable(_) => warp::http::StatusCode::SERVICE_UNAVAILABLE,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to a client.
    ///
    /// Configuration and internal errors are collapsed to generic text so
    /// server-side detail (credentials in particular) never crosses the wire.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Config(_) => {
                "Server configuration error: payment processing unavailable".to_string()
            }
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

// Implement warp::reject::Reject for AppError
impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}
