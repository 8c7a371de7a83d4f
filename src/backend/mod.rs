//! Backend Module
//!
//! This module contains all server-side code for Echo Frontier: the
//! WebSocket session gateway, authentication, document persistence and
//! real-time fan-out.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Router assembly (`/ws`, `/data`, CORS, tracing)
//! - **`gateway`** - WebSocket connections and event dispatch
//! - **`auth`** - Users, login, JWT sessions, invitations
//! - **`documents`** - JSON document files
//! - **`realtime`** - Connection registry and save fan-out
//! - **`middleware`** - Origin check and write policy
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Configuration and state
//! ├── routes/         - Route configuration
//! ├── gateway/        - WebSocket gateway
//! ├── auth/           - Authentication
//! ├── documents/      - Document persistence
//! ├── realtime/       - Event delivery
//! ├── middleware/     - Request and event checks
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! The server binary runs a current-thread tokio runtime, so connection
//! tasks interleave on one thread. Each connection handles its own events in
//! arrival order. File writes go through `tokio::fs` and bcrypt through the
//! blocking pool. Shared state sits behind `Arc<RwLock<>>`.
//!
//! # Example
//!
//! ```rust,no_run
//! use echo_frontier::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// WebSocket session gateway
pub mod gateway;

/// Authentication and user management
pub mod auth;

/// Document persistence
pub mod documents;

/// Real-time event delivery
pub mod realtime;

/// Origin check and write policy
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
