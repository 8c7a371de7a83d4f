//! Shared Module
//!
//! Types that describe the gateway protocol independently of the server:
//! the inbound/outbound event envelopes, the named documents and the
//! protocol error type. Anything that speaks to the gateway (the server
//! itself, integration tests, a Rust client) uses these types.

/// Gateway event envelopes
pub mod event;

/// Named JSON documents
pub mod document;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use event::{ClientEvent, LoginRequest, LoginSuccess, ServerEvent};
pub use document::DocumentName;
pub use error::SharedError;
