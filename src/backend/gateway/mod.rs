//! Session Gateway Module
//!
//! Persistent WebSocket connections carrying named JSON events of the form
//! `{"event": "<name>", "data": <payload>}`.
//!
//! # Module Structure
//!
//! ```text
//! gateway/
//! ├── mod.rs          - Module exports and documentation
//! ├── socket.rs       - Upgrade handler and connection loop
//! └── dispatch.rs     - Event routing and handlers
//! ```

/// Event routing
pub mod dispatch;

/// WebSocket transport
pub mod socket;

pub use dispatch::{dispatch, dispatch_frame, ConnectionContext, PONG_MESSAGE};
pub use socket::{handle_socket_upgrade, run_connection};
