/**
 * Application State Management
 *
 * `AppState` is the central state container shared by the router and every
 * gateway connection. It holds:
 * - the user store and session keys (login)
 * - the document store (writes)
 * - the connection registry (fan-out)
 * - the write policy and origin allow-list
 *
 * Everything inside is cheap to clone (`Arc` or pool handles), so the state
 * is cloned into each connection task.
 */

use std::sync::Arc;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::UserStore;
use crate::backend::documents::DocumentStore;
use crate::backend::middleware::AuthorizationPolicy;
use crate::backend::realtime::ConnectionRegistry;
use crate::backend::server::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub users: UserStore,
    pub sessions: SessionKeys,
    pub documents: DocumentStore,
    pub registry: ConnectionRegistry,
    pub policy: AuthorizationPolicy,
    /// bcrypt cost used when activating accounts
    pub password_cost: u32,
    pub allowed_origins: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(config: &ServerConfig, users: UserStore) -> Self {
        Self {
            users,
            sessions: SessionKeys::from_secret(&config.jwt_secret),
            documents: DocumentStore::new(config.data_dir.clone()),
            registry: ConnectionRegistry::new(),
            policy: config.write_policy,
            password_cost: config.bcrypt_cost,
            allowed_origins: Arc::new(config.allowed_origins.clone()),
        }
    }
}
