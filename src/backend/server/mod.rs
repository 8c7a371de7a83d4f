//! Server Module
//!
//! Configuration, shared state and application assembly.
//!
//! # Architecture
//!
//! - **`config`** - `ServerConfig` from environment variables, user store loading
//! - **`state`** - `AppState`, the state shared by routes and connections
//! - **`init`** - `create_app`
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration loading
//! ├── state.rs        - AppState
//! └── init.rs         - Application creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **User Store**: PostgreSQL when `DATABASE_URL` is set, otherwise in-memory
//! 3. **State Creation**: session keys, document store, connection registry
//! 4. **Router Creation**: `/ws`, `/data`, CORS and tracing layers

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_app_with_store};
pub use state::AppState;
