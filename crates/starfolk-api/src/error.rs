//! Error types for the API layer.
//!
//! [`ApiError`] converts into an Axum response. Data-load failures are
//! not represented here: the store absorbs them and serves an empty
//! collection.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No character has the requested id.
    #[error("Not found")]
    NotFound,

    /// The path does not name a valid resource, e.g. a non-integer id.
    /// Answered like an unmatched route, with an empty body.
    #[error("no such route")]
    NoRoute,

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                axum::Json(serde_json::json!({ "error": "Not found" })),
            )
                .into_response(),
            Self::NoRoute => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(serde_json::json!({ "error": msg })),
                )
                    .into_response()
            }
        }
    }
}
