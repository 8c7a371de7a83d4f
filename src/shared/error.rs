//! Shared Error Types
//!
//! Errors raised while encoding or decoding gateway frames. They are shared
//! between the server and any Rust client of the protocol.
//!
//! # Error Categories
//!
//! - `SerializationError` - the frame is not valid JSON or does not match the payload shape
//! - `ValidationError` - the envelope is missing a required field
//! - `UnknownEvent` - the envelope names an event the gateway does not route
//! - `InvalidPayload` - a known event whose `data` does not fit its payload
//!
//! # Usage
//!
//! ```rust
//! use echo_frontier::shared::error::SharedError;
//!
//! let error = SharedError::validation("event", "missing event name");
//! ```
use thiserror::Error;

/// Protocol-level errors
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Envelope validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Event name not routed by the gateway
    #[error("Unknown event: {name}")]
    UnknownEvent {
        name: String,
    },

    /// Known event name, unusable payload
    #[error("Invalid payload for '{event}': {message}")]
    InvalidPayload {
        event: String,
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown-event error
    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent { name: name.into() }
    }

    /// Create a new invalid-payload error
    pub fn invalid_payload(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            event: event.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
