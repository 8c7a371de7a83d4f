/**
 * Connection Registry
 *
 * Tracks every live gateway connection and its outbound queue. Handlers
 * never touch sockets directly: they push `ServerEvent`s into the queues and
 * each connection's writer task drains its own queue onto the socket.
 *
 * A send to a connection whose writer already stopped is dropped silently;
 * the connection unregisters itself on disconnect.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::shared::ServerEvent;

/// Server-assigned identity of one gateway connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outbound side of a connection
pub type Outbox = mpsc::UnboundedSender<ServerEvent>;

/// Live connections keyed by id
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    connections: Arc<RwLock<HashMap<ConnectionId, Outbox>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection, returning its id and the queue its writer drains
    pub async fn register(&self) -> (ConnectionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let id = ConnectionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.write().await.insert(id, tx);
        (id, rx)
    }

    pub async fn unregister(&self, id: ConnectionId) -> bool {
        self.connections.write().await.remove(&id).is_some()
    }

    /// Send to one connection; `false` if it is gone
    pub async fn emit_to(&self, id: ConnectionId, event: ServerEvent) -> bool {
        match self.connections.read().await.get(&id) {
            Some(outbox) => outbox.send(event).is_ok(),
            None => {
                tracing::debug!("[Realtime] Dropping {} for unknown connection {}", event.name(), id);
                false
            }
        }
    }

    /// Send to every connection except `sender`, returning the number reached
    pub async fn broadcast_except(&self, sender: ConnectionId, event: ServerEvent) -> usize {
        let connections = self.connections.read().await;
        let delivered = connections
            .iter()
            .filter(|(id, _)| **id != sender)
            .filter(|(_, outbox)| outbox.send(event.clone()).is_ok())
            .count();
        tracing::debug!("[Realtime] {} broadcast to {} connections", event.name(), delivered);
        delivered
    }

    /// Send to every connection, returning the number reached
    pub async fn broadcast_all(&self, event: ServerEvent) -> usize {
        let connections = self.connections.read().await;
        let delivered = connections
            .values()
            .filter(|outbox| outbox.send(event.clone()).is_ok())
            .count();
        tracing::debug!("[Realtime] {} broadcast to {} connections", event.name(), delivered);
        delivered
    }

    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }
}
