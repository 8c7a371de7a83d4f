//! Middleware Module
//!
//! Checks applied before the gateway acts on a request or event.
//!
//! # Architecture
//!
//! - **`origin`** - `Origin` allow-list for WebSocket upgrades
//! - **`policy`** - which connections may write documents

pub mod origin;
pub mod policy;

pub use origin::check_origin;
pub use policy::{AuthorizationPolicy, NOT_AUTHORIZED};
