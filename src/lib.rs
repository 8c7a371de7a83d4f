//! Echo Frontier - Main Library
//!
//! Real-time backend for a small team-coordination web app. Clients hold a
//! WebSocket connection, log in over it and save four shared JSON documents
//! (progress, team roster, projects, availability) that other connected
//! clients are told about.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between server and clients
//!   - Wire events (`ClientEvent`, `ServerEvent`)
//!   - Document names
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum server with the WebSocket gateway
//!   - bcrypt/JWT authentication backed by PostgreSQL or memory
//!   - File-backed documents and broadcast fan-out
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and both binaries
//!
//! # Binaries
//!
//! - `echo-frontier-server` - the server
//! - `frontier-invite` - adds invited users to the database
//!
//! # Wire Format
//!
//! Every frame is a JSON text message:
//!
//! ```json
//! {"event": "attempt-login", "data": {"username": "Flame", "password": "abc123"}}
//! ```
//!
//! Events without a payload omit `data`.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
