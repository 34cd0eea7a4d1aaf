use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use storefront_core::ValidationErrors;

/// Request rejection raised before any handler logic runs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed to parse or violated a field constraint.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Body was sent with the wrong (or no) `Content-Type`.
    #[error("{0}")]
    UnsupportedMediaType(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => validation_error_response(errors),
            ApiError::UnsupportedMediaType(msg) => {
                json_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_media_type", msg)
            }
        }
    }
}

pub fn validation_error_response(errors: ValidationErrors) -> Response {
    tracing::debug!(fields = errors.len(), "request rejected by validation");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": errors.to_string(),
            "errors": errors.errors(),
        })),
    )
        .into_response()
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
