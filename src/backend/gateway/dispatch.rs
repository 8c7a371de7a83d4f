/**
 * Event Dispatch
 *
 * Routes one decoded client event to its handler and queues the replies.
 * Everything here is transport-agnostic: replies go through the connection
 * registry, never directly to a socket.
 *
 * | Inbound                | Handler                                   |
 * |------------------------|-------------------------------------------|
 * | `ping-test`            | `pong-test` to the sender                 |
 * | `attempt-login`        | `activate_or_authenticate`                |
 * | `update-progress-file` | write `progress`, refresh everyone        |
 * | `update-team-file`     | write `team`, sender only                 |
 * | `update-projects-file` | write `projects`, sender only             |
 * | `save-availability`    | write `availability`, push to the others  |
 *
 * Failures become an error event to the sender; none ends the connection.
 * A known event with an unusable `data` payload is answered the same way
 * (`login-error` or `save-error`); frames that name no known event are
 * logged and dropped.
 */

use serde_json::Value;

use crate::backend::auth::handlers::activate_or_authenticate;
use crate::backend::auth::sessions::Claims;
use crate::backend::error::AuthError;
use crate::backend::middleware::NOT_AUTHORIZED;
use crate::backend::realtime::{announce_failed, announce_saved, ConnectionId};
use crate::backend::server::state::AppState;
use crate::shared::{ClientEvent, DocumentName, LoginRequest, ServerEvent, SharedError};

/// Reply to `ping-test`
pub const PONG_MESSAGE: &str = "Server is active and listening.";

/// Per-connection state kept by the reader loop
#[derive(Debug, Clone)]
pub struct ConnectionContext {
    pub id: ConnectionId,
    /// Claims from the last successful login on this connection
    pub session: Option<Claims>,
}

impl ConnectionContext {
    pub fn new(id: ConnectionId) -> Self {
        Self { id, session: None }
    }
}

/// Decode a text frame and dispatch it
pub async fn dispatch_frame(state: &AppState, ctx: &mut ConnectionContext, text: &str) {
    match ClientEvent::decode(text) {
        Ok(event) => dispatch(state, ctx, event).await,
        Err(SharedError::InvalidPayload { event, message }) => {
            tracing::warn!("[Gateway] Bad {} payload from {}: {}", event, ctx.id, message);
            if let Some(reply) = payload_error_reply(&event, &message) {
                state.registry.emit_to(ctx.id, reply).await;
            }
        }
        Err(e) => tracing::warn!("[Gateway] Ignoring frame from {}: {}", ctx.id, e),
    }
}

/// Reply for a known event whose payload did not decode
fn payload_error_reply(event: &str, message: &str) -> Option<ServerEvent> {
    match event {
        "ping-test" => Some(ServerEvent::PongTest(PONG_MESSAGE.to_string())),
        "attempt-login" => {
            let err = AuthError::Server(message.to_string());
            Some(ServerEvent::LoginError(err.client_message().to_string()))
        }
        other => ClientEvent::document_for(other)
            .map(|document| ServerEvent::SaveError(format!("Invalid {} data: {}", document, message))),
    }
}

/// Handle one client event
pub async fn dispatch(state: &AppState, ctx: &mut ConnectionContext, event: ClientEvent) {
    tracing::debug!("[Gateway] {} from {}", event.name(), ctx.id);

    match event {
        ClientEvent::PingTest => {
            state
                .registry
                .emit_to(ctx.id, ServerEvent::PongTest(PONG_MESSAGE.to_string()))
                .await;
        }
        ClientEvent::AttemptLogin(request) => login(state, ctx, request).await,
        ClientEvent::UpdateProgressFile(value) => {
            save_document(state, ctx, DocumentName::Progress, value).await
        }
        ClientEvent::UpdateTeamFile(value) => {
            save_document(state, ctx, DocumentName::Team, value).await
        }
        ClientEvent::UpdateProjectsFile(value) => {
            save_document(state, ctx, DocumentName::Projects, value).await
        }
        ClientEvent::SaveAvailability(value) => {
            save_document(state, ctx, DocumentName::Availability, value).await
        }
    }
}

async fn login(state: &AppState, ctx: &mut ConnectionContext, request: LoginRequest) {
    let reply = match activate_or_authenticate(
        &state.users,
        &state.sessions,
        state.password_cost,
        request,
    )
    .await
    {
        Ok(grant) => {
            let reply = ServerEvent::LoginSuccess(grant.to_success());
            ctx.session = Some(grant.claims);
            reply
        }
        Err(e) => ServerEvent::LoginError(e.client_message().to_string()),
    };

    state.registry.emit_to(ctx.id, reply).await;
}

async fn save_document(
    state: &AppState,
    ctx: &ConnectionContext,
    document: DocumentName,
    value: Value,
) {
    if !state.policy.permits_write(ctx.session.as_ref()) {
        tracing::warn!("[Gateway] Refused {} write from {}: not logged in", document, ctx.id);
        state
            .registry
            .emit_to(ctx.id, ServerEvent::SaveError(NOT_AUTHORIZED.to_string()))
            .await;
        return;
    }

    match state.documents.write(document, &value).await {
        Ok(()) => {
            tracing::info!("[Storage] {} saved by {}", document, ctx.id);
            announce_saved(&state.registry, ctx.id, document, value).await;
        }
        Err(e) => announce_failed(&state.registry, ctx.id, document, &e).await,
    }
}
