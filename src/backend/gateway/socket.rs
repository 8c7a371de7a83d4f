/**
 * WebSocket Transport
 *
 * `GET /ws` upgrade handler and the per-connection loop.
 *
 * # Connection Lifecycle
 *
 * 1. Origin check, then upgrade
 * 2. Register in the connection registry (gets an id and an outbound queue)
 * 3. Writer task drains the queue onto the socket
 * 4. Reader loop handles inbound text frames one at a time, in order
 * 5. On close or error: unregister, let the writer finish, log
 */

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};

use crate::backend::error::BackendError;
use crate::backend::gateway::dispatch::{dispatch_frame, ConnectionContext};
use crate::backend::middleware::check_origin;
use crate::backend::server::state::AppState;

/// Upgrade handler for `GET /ws`
pub async fn handle_socket_upgrade(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, BackendError> {
    check_origin(&headers, &state.allowed_origins)?;
    Ok(ws.on_upgrade(move |socket| run_connection(socket, state)))
}

/// Drive one connection until it closes
pub async fn run_connection(socket: WebSocket, state: AppState) {
    let (id, mut outbox) = state.registry.register().await;
    tracing::info!("[Gateway] Client connected: {}", id);

    let (mut sink, mut stream) = socket.split();

    let writer = tokio::spawn(async move {
        while let Some(event) = outbox.recv().await {
            // Payloads are strings and JSON values, so encoding cannot fail in
            // practice; a failure would skip only this event.
            let text = match event.encode() {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("[Realtime] Dropped {} for {}: {}", event.name(), id, e);
                    continue;
                }
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut ctx = ConnectionContext::new(id);
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => dispatch_frame(&state, &mut ctx, text.as_str()).await,
            Ok(Message::Binary(_)) => {
                tracing::warn!("[Gateway] Ignoring binary frame from {}", id);
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("[Gateway] Socket error on {}: {}", id, e);
                break;
            }
        }
    }

    // Dropping the registry entry closes the queue, which ends the writer.
    state.registry.unregister(id).await;
    if let Err(e) = writer.await {
        tracing::error!("[Gateway] Writer task for {} failed: {}", id, e);
    }
    tracing::info!("[Gateway] Client disconnected: {}", id);
}
