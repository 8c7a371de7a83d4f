/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so route handlers can return it
 * directly. The body is JSON:
 *
 * ```json
 * { "error": "Origin not allowed", "status": 403 }
 * ```
 */

use axum::{
    response::{IntoResponse, Json, Response},
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
