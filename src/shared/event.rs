/**
 * Gateway Event Protocol
 *
 * Events exchanged over the persistent socket connection. Every frame is a
 * JSON text frame shaped as an envelope:
 *
 * ```json
 * { "event": "update-progress-file", "data": { "step": 2 } }
 * ```
 *
 * `data` is omitted for events that carry no payload (`ping-test`,
 * `save-success`).
 */
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::document::DocumentName;
use crate::shared::error::SharedError;

/// Credentials sent with `attempt-login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    /// Plaintext password, hashed or verified server-side
    pub password: String,
}

/// Payload of `login-success`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSuccess {
    /// Signed session token (24 hour expiry)
    pub token: String,
    pub message: String,
}

/// Events sent by clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Liveness probe, answered with `pong-test`
    PingTest,
    /// Log in, or activate an invited account
    AttemptLogin(LoginRequest),
    UpdateProgressFile(Value),
    UpdateTeamFile(Value),
    UpdateProjectsFile(Value),
    SaveAvailability(Value),
}

impl ClientEvent {
    /// Wire names of every inbound event
    pub const NAMES: [&'static str; 6] = [
        "ping-test",
        "attempt-login",
        "update-progress-file",
        "update-team-file",
        "update-projects-file",
        "save-availability",
    ];

    /// Decode a text frame
    ///
    /// Unknown event names are reported separately from malformed frames so
    /// the gateway can log them differently. A known name whose `data` does
    /// not fit is `InvalidPayload`, which the gateway answers.
    pub fn decode(text: &str) -> Result<Self, SharedError> {
        let envelope: Value = serde_json::from_str(text)?;
        let name = envelope
            .get("event")
            .and_then(Value::as_str)
            .ok_or_else(|| SharedError::validation("event", "missing event name"))?;

        if !Self::NAMES.contains(&name) {
            return Err(SharedError::unknown_event(name));
        }

        let name = name.to_string();
        serde_json::from_value(envelope)
            .map_err(|e| SharedError::invalid_payload(name, e.to_string()))
    }

    /// Wire name of this event
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::PingTest => "ping-test",
            ClientEvent::AttemptLogin(_) => "attempt-login",
            ClientEvent::UpdateProgressFile(_) => "update-progress-file",
            ClientEvent::UpdateTeamFile(_) => "update-team-file",
            ClientEvent::UpdateProjectsFile(_) => "update-projects-file",
            ClientEvent::SaveAvailability(_) => "save-availability",
        }
    }

    /// Document written by the event with wire name `name`
    pub fn document_for(name: &str) -> Option<DocumentName> {
        match name {
            "update-progress-file" => Some(DocumentName::Progress),
            "update-team-file" => Some(DocumentName::Team),
            "update-projects-file" => Some(DocumentName::Projects),
            "save-availability" => Some(DocumentName::Availability),
            _ => None,
        }
    }

    /// Encode as a text frame
    pub fn encode(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Events sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    PongTest(String),
    LoginSuccess(LoginSuccess),
    LoginError(String),
    SaveSuccess,
    SaveError(String),
    /// New availability pushed to every other connection
    LoadAvailability(Value),
}

impl ServerEvent {
    /// Wire name of this event
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::PongTest(_) => "pong-test",
            ServerEvent::LoginSuccess(_) => "login-success",
            ServerEvent::LoginError(_) => "login-error",
            ServerEvent::SaveSuccess => "save-success",
            ServerEvent::SaveError(_) => "save-error",
            ServerEvent::LoadAvailability(_) => "load-availability",
        }
    }

    /// Encode as a text frame
    pub fn encode(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}
