//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glimpse::GlimpseError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Internal server error.
    Internal(String),
    /// Error from the glimpse library.
    Glimpse(GlimpseError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            ApiError::Glimpse(e) => match e {
                GlimpseError::MalformedInput { .. } => (StatusCode::BAD_REQUEST, "malformed_input"),
                GlimpseError::Csv(_) => (StatusCode::BAD_REQUEST, "invalid_csv"),
                GlimpseError::Json(_) => (StatusCode::BAD_REQUEST, "invalid_json"),
                GlimpseError::EmptyData(_) => (StatusCode::BAD_REQUEST, "empty_data"),
                GlimpseError::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, "unsupported_format"),
                GlimpseError::InvalidDelimiter(_) => (StatusCode::BAD_REQUEST, "invalid_delimiter"),
                GlimpseError::InputTooLarge { .. } => {
                    (StatusCode::PAYLOAD_TOO_LARGE, "input_too_large")
                }
                GlimpseError::Io { .. } | GlimpseError::Config(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal")
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.parts();
        let message = match self {
            ApiError::Internal(msg) => msg,
            ApiError::Glimpse(e) => e.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<GlimpseError> for ApiError {
    fn from(err: GlimpseError) -> Self {
        ApiError::Glimpse(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("profiling task failed: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Glimpse(e) => write!(f, "Glimpse error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
