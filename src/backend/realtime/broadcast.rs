/**
 * Save Fan-out
 *
 * Decides who hears about a document write.
 *
 * | Document     | Success                                              |
 * |--------------|------------------------------------------------------|
 * | progress     | `save-success` to everyone (origin included)         |
 * | team         | `save-success` to origin                             |
 * | projects     | `save-success` to origin                             |
 * | availability | `save-success` to origin, `load-availability` others |
 *
 * Failures are only ever reported to the origin.
 */

use serde_json::Value;

use crate::backend::error::PersistenceError;
use crate::backend::realtime::registry::{ConnectionId, ConnectionRegistry};
use crate::shared::{DocumentName, ServerEvent};

/// Audience of a successful save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFanout {
    /// Only the connection that wrote
    OriginOnly,
    /// Every connection gets `save-success` so it reloads
    RefreshEveryone,
    /// Origin gets `save-success`, everyone else the new value
    PushToOthers,
}

impl SaveFanout {
    pub fn for_document(document: DocumentName) -> Self {
        match document {
            DocumentName::Progress => Self::RefreshEveryone,
            DocumentName::Team | DocumentName::Projects => Self::OriginOnly,
            DocumentName::Availability => Self::PushToOthers,
        }
    }
}

/// Announce a successful write of `document`
pub async fn announce_saved(
    registry: &ConnectionRegistry,
    origin: ConnectionId,
    document: DocumentName,
    value: Value,
) {
    match SaveFanout::for_document(document) {
        SaveFanout::OriginOnly => {
            registry.emit_to(origin, ServerEvent::SaveSuccess).await;
        }
        SaveFanout::RefreshEveryone => {
            let reached = registry.broadcast_all(ServerEvent::SaveSuccess).await;
            tracing::info!("[Realtime] {} saved, refreshed {} connections", document, reached);
        }
        SaveFanout::PushToOthers => {
            registry.emit_to(origin, ServerEvent::SaveSuccess).await;
            let reached = registry
                .broadcast_except(origin, ServerEvent::LoadAvailability(value))
                .await;
            tracing::info!("[Realtime] {} pushed to {} other connections", document, reached);
        }
    }
}

/// Report a failed write of `document` to the origin
pub async fn announce_failed(
    registry: &ConnectionRegistry,
    origin: ConnectionId,
    document: DocumentName,
    error: &PersistenceError,
) {
    tracing::error!("[Storage] Failed to save {}: {}", document, error);
    registry
        .emit_to(origin, ServerEvent::SaveError(error.client_message()))
        .await;
}
