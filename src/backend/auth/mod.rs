//! Authentication Module
//!
//! This module handles account activation, login, session tokens and the
//! invitation of new team members.
//!
//! # Architecture
//!
//! - **`users`** - User model and store (PostgreSQL or in-memory)
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - Login handler used by the gateway
//! - **`invite`** - Bulk creation of invited accounts
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and store operations
//! ├── sessions.rs     - JWT token management
//! ├── invite.rs       - Invitation of new members
//! └── handlers/
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Login result types
//!     └── login.rs    - Activation / authentication
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Invite**: an operator adds usernames with no password
//! 2. **First login**: the supplied password becomes the account password
//! 3. **Later logins**: the password is checked against the stored bcrypt hash
//!
//! Every successful login returns a JWT valid for 24 hours.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication (no revocation)
//! - The client sees a fixed message per failure; details go to the log

/// User data model and store operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Login handler
pub mod handlers;

/// Invitation of new members
pub mod invite;

pub use handlers::{activate_or_authenticate, LoginGrant, LoginKind};
pub use invite::{invite_users, InviteReport};
pub use sessions::{Claims, SessionKeys};
pub use users::{User, UserStore};
