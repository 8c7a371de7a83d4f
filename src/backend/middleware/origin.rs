/**
 * Origin Check
 *
 * Browsers attach an `Origin` header to WebSocket upgrades. Upgrades from an
 * origin outside the allow-list are refused with 403; requests without the
 * header (non-browser clients) pass.
 */

use axum::http::{header::ORIGIN, HeaderMap, StatusCode};

use crate::backend::error::BackendError;

/// Reject the request if its `Origin` is not allowed
pub fn check_origin(headers: &HeaderMap, allowed: &[String]) -> Result<(), BackendError> {
    let Some(origin) = headers.get(ORIGIN) else {
        return Ok(());
    };

    let origin = origin.to_str().map_err(|_| {
        tracing::warn!("[Gateway] Rejected upgrade with malformed Origin header");
        BackendError::handler(StatusCode::FORBIDDEN, "Origin not allowed")
    })?;

    if allowed.iter().any(|a| a == origin) {
        Ok(())
    } else {
        tracing::warn!("[Gateway] Rejected upgrade from origin {}", origin);
        Err(BackendError::handler(StatusCode::FORBIDDEN, "Origin not allowed"))
    }
}
