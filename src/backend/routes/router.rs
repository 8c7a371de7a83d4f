/**
 * Router Configuration
 *
 * Assembles the HTTP surface:
 *
 * - `GET /ws` - WebSocket upgrade into the session gateway
 * - `GET /data/<name>.json` - read-only static serving of the data directory
 * - anything else - 404
 *
 * All routes share a `TraceLayer` and a `CorsLayer` built from the same
 * origin allow-list the gateway enforces on upgrades.
 */

use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::gateway::handle_socket_upgrade;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.allowed_origins);
    let data_dir = ServeDir::new(app_state.documents.data_dir());

    Router::new()
        .route("/ws", get(handle_socket_upgrade))
        .nest_service("/data", data_dir)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state)
}

/// CORS for the configured origins: GET/POST, credentials allowed
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
}
