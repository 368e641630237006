//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ludex_domain::error::LudexError;

/// JSON error body returned by API endpoints.
///
/// The field name `message` is part of the wire contract for 404s.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps [`LudexError`] to an HTTP response with appropriate status code.
pub struct ApiError(LudexError);

impl From<LudexError> for ApiError {
    fn from(err: LudexError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LudexError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            LudexError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
