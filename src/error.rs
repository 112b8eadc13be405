use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client sent an incomplete or invalid payload (400)
    #[error("{0}")]
    Validation(String),

    /// Referenced resource does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; surfaced as an opaque 500.
    /// No current operation produces this, but anything added later
    /// (persistence, outbound calls) must map its failures here rather
    /// than leak internals to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Internal(_) => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
