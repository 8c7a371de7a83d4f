//! Backend Error Module
//!
//! Error types for the server side of the gateway.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse for BackendError
//! ```
//!
//! # Propagation
//!
//! Errors raised while handling a socket event never leave the connection
//! task: they are converted into `login-error` / `save-error` events for the
//! originating connection. Only HTTP handlers (the upgrade route) return
//! `BackendError` as a response.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError, PersistenceError, StoreError};
