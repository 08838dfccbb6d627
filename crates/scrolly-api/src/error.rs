//! Scrolly API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scrolly_core::error::{ErrorKind, ScrollyError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// What operation was in progress.
    pub action: String,
    /// Human-readable error message.
    pub message: String,
    /// How to fix it, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// HTTP-layer wrapper around `ScrollyError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub ScrollyError);

impl From<ScrollyError> for ApiError {
    fn from(err: ScrollyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ScrollyError {
            kind,
            action,
            message,
            hint,
        } = self.0;

        let status = match kind {
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Fetch => StatusCode::BAD_GATEWAY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(%kind, %action, %message, "request failed");
        } else {
            warn!(%kind, %action, %message, "request rejected");
        }

        let body = ErrorBody {
            error: kind.code(),
            action,
            message,
            hint,
        };

        (status, Json(body)).into_response()
    }
}
