/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the user store (PostgreSQL or in-memory)
 * 2. Create the shared state (session keys, document store, registry)
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_user_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only if `DATABASE_URL` is configured and the database cannot be
/// reached or bootstrapped.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Echo Frontier backend server");

    let users = load_user_store(config).await?;
    tracing::info!("User store ready ({})", users.backend_name());

    Ok(create_app_with_store(config, users))
}

/// Build the application around an already opened user store
pub fn create_app_with_store(config: &ServerConfig, users: UserStore) -> Router<()> {
    let app_state = AppState::new(config, users);
    tracing::info!(
        "Documents stored in {}, write policy {}",
        app_state.documents.data_dir().display(),
        app_state.policy
    );

    create_router(app_state)
}
