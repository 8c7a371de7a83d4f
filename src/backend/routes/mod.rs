//! Route Configuration Module
//!
//! # Route Types
//!
//! - `GET /ws` - WebSocket session gateway
//! - `GET /data/{name}.json` - static, read-only documents
//!
//! Unknown paths fall through to a 404 handler.

/// Main router creation
pub mod router;

pub use router::create_router;
