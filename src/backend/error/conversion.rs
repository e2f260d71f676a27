/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Upstream (GIS proxy) failures:
 * ```json
 * { "error": "Failed to fetch forest boundaries", "details": "operation timed out" }
 * ```
 *
 * Everything else, matching the spot API's success envelope:
 * ```json
 * { "success": false, "error": "Missing required field: name" }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Database(e) => tracing::error!("Database error: {:?}", e),
            Self::Session(e) => tracing::error!("Session store error: {:?}", e),
            Self::Upstream { message, details } => {
                tracing::error!("{}: {}", message, details)
            }
            _ if status.is_server_error() => tracing::error!("{}", self),
            _ => tracing::debug!("Request rejected ({}): {}", status.as_u16(), self),
        }

        let body = match self {
            Self::Upstream { message, details } => serde_json::json!({
                "error": message,
                "details": details,
            }),
            other => serde_json::json!({
                "success": false,
                "error": other.message(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    /// Malformed or mistyped JSON bodies are client errors
    fn from(rejection: JsonRejection) -> Self {
        BackendError::handler(
            StatusCode::BAD_REQUEST,
            format!("Invalid JSON body: {}", rejection.body_text()),
        )
    }
}

impl From<QueryRejection> for BackendError {
    /// Unparseable query strings (e.g. a repeated `state`) are client errors
    fn from(rejection: QueryRejection) -> Self {
        BackendError::handler(
            StatusCode::BAD_REQUEST,
            format!("Invalid query string: {}", rejection.body_text()),
        )
    }
}
