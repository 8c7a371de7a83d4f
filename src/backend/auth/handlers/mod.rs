//! Authentication Handlers Module
//!
//! Handlers invoked by the gateway for authentication events.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Login result types
//! └── login.rs    - attempt-login handler (activation or authentication)
//! ```

/// Login result types
pub mod types;

/// Login handler
pub mod login;

pub use types::{LoginGrant, LoginKind};
pub use login::activate_or_authenticate;
