use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// API-specific error wrapper that converts AppError into HTTP responses.
///
/// Outcomes are distinguished by body shape, not status line: a failed store
/// operation is reported as an `{"error": …}` body on an otherwise ordinary
/// 200 response, mirroring the success-string contract of the write routes.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.to_string()
        });

        (StatusCode::OK, axum::Json(body)).into_response()
    }
}
