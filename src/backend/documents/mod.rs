//! Document Persistence Module
//!
//! Whole-file JSON storage for the shared documents (`progress`, `team`,
//! `projects`, `availability`). The gateway writes them; browsers read them
//! back through the static `/data` route.

/// File-backed document store
pub mod store;

pub use store::DocumentStore;
