use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Application error surfaced by the repository and service layers.
///
/// Exactly two kinds exist. Per-field mapping problems never become errors;
/// they degrade the affected field to its zero value instead.
///
/// - [`AppError::NotFound`] - the store affirmatively has no matching record,
///   or the record exists but is unpublished (callers cannot tell these apart)
/// - [`AppError::FetchFailed`] - any transport, auth, or query failure talking
///   to the store; not recoverable at this layer
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    FetchFailed { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn fetch_failed(message: impl Into<String>, details: Value) -> Self {
        Self::FetchFailed {
            message: message.into(),
            details,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message, details } => {
                tracing::debug!(%details, "not found: {message}");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::FetchFailed { message, details } => {
                tracing::error!(%details, "content store fetch failed: {message}");
                (StatusCode::BAD_GATEWAY, message)
            }
        };

        (status, message).into_response()
    }
}
