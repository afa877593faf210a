use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{model::FieldErrors, repository::StorageError};

/// Every way a request can fail, and the response each one maps to.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 404 with an empty body.
    #[error("todo not found")]
    NotFound,

    /// 400 with the field-error map as the body.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// 400 for a body that could not be read as a todo payload.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// 415 for a body sent without a JSON content type.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// 500. Logged here; the detail never reaches the client.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            ApiError::MalformedBody(reason) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response()
            }
            ApiError::UnsupportedMediaType(reason) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(json!({ "error": reason })),
            )
                .into_response(),
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
