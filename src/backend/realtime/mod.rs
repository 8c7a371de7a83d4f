//! Real-time Update Module
//!
//! Delivery of server events to connected clients.
//!
//! # Architecture
//!
//! - **`registry`** - live connections and their outbound queues
//! - **`broadcast`** - who is told about a document save
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── registry.rs     - Connection registry (emit / broadcast)
//! └── broadcast.rs    - Save fan-out rules
//! ```
//!
//! # Delivery
//!
//! Each connection owns an unbounded `tokio::sync::mpsc` queue. Emitting is
//! a queue push, so a broadcast from one connection never waits on another
//! connection's socket.

/// Connection registry
pub mod registry;

/// Save fan-out rules
pub mod broadcast;

pub use broadcast::{announce_failed, announce_saved, SaveFanout};
pub use registry::{ConnectionId, ConnectionRegistry};
