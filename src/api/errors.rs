use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Converts AppError into the `{ success: false, message }` JSON body.
///
/// Server-side failures are logged with their detail and answered with a
/// generic message; client errors echo the reason back.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Auth(msg) => {
                tracing::debug!(status = status.as_u16(), "Request rejected: {msg}");
                msg.clone()
            }
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                tracing::error!("{self}");
                "Internal server error".to_string()
            }
        };

        let body = serde_json::json!({
            "success": false,
            "message": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Malformed or schema-violating JSON bodies become `BadRequest`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
