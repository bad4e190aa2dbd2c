//! Error-to-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use formforge_core::FormForgeError;

/// A [`FormForgeError`] carried through an axum handler.
///
/// Serializes as `{"error": ..., "status": ...}`; submission validation
/// failures additionally carry the full per-field report under
/// `"fieldErrors"`.
pub struct ApiError(pub FormForgeError);

/// Handler result alias.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<FormForgeError> for ApiError {
    fn from(err: FormForgeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let mut body = serde_json::json!({
            "error": self.0.to_string(),
            "status": status.as_u16(),
        });
        if let FormForgeError::Validation(report) = &self.0 {
            if let Ok(value) = serde_json::to_value(report) {
                body["fieldErrors"] = value;
            }
        }
        (status, Json(body)).into_response()
    }
}
