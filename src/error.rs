//! Error types shared across layers.
//!
//! [`AppError`] is what handlers return; it renders as the public JSON error
//! body. [`UpstreamError`] classifies failures talking to the upstream user
//! directory. Upstream errors are logged with their kind and collapsed into a
//! route-specific [`AppError::Upstream`] before they reach a client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Public error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request payload failed validation (400).
    #[error("{message}")]
    Validation { message: String },

    /// The request body exceeded the extractor's size limit (413).
    #[error("payload too large")]
    PayloadTooLarge,

    /// The upstream directory reported the user as missing (404, empty body).
    #[error("not found")]
    NotFound,

    /// The upstream call failed or returned unusable data (500).
    #[error("{message}")]
    Upstream { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Maps an unreadable JSON body onto the route's validation error.
    ///
    /// Bodies over the size limit keep their 413 status.
    pub fn from_json_rejection(rejection: &JsonRejection, message: impl Into<String>) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::bad_request(message)
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotFound => status.into_response(),
            AppError::PayloadTooLarge => (
                status,
                Json(ErrorBody {
                    error: "Payload too large".to_string(),
                }),
            )
                .into_response(),
            AppError::Validation { message } | AppError::Upstream { message } => {
                (status, Json(ErrorBody { error: message })).into_response()
            }
        }
    }
}

/// Failure talking to the upstream user directory.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream responded with status {status}")]
    Status { status: u16 },

    #[error("upstream returned an unreadable body: {0}")]
    Decode(String),

    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    /// Short label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
            Self::InvalidUrl(_) => "invalid_url",
        }
    }
}
