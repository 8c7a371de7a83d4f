/**
 * Backend Error Types
 *
 * Error taxonomy for the server, one enum per domain:
 *
 * - `StoreError` - user store failures (duplicate username, database errors)
 * - `AuthError` - outcome of a failed login attempt
 * - `PersistenceError` - document write/read failures
 * - `BackendError` - HTTP-level errors returned from route handlers
 *
 * # Client Messages
 *
 * Auth failures are reported to the client with fixed generic messages; the
 * internal detail of `AuthError::Server` is only logged. Persistence failures
 * carry the I/O detail through to the client message.
 */

use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// User store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The username is already taken (or already activated)
    #[error("username '{username}' already exists")]
    Conflict {
        username: String,
    },

    /// Driver-level failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn conflict(username: impl Into<String>) -> Self {
        Self::Conflict {
            username: username.into(),
        }
    }
}

/// Login failures
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    /// Store, hashing or signing failure; the message stays server-side
    #[error("authentication server error: {0}")]
    Server(String),
}

impl AuthError {
    /// Message sent to the client in `login-error`
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::UserNotFound => "Username not found.",
            Self::InvalidCredentials => "Invalid Credentials.",
            Self::Server(_) => "Server authentication error.",
        }
    }
}

/// Document persistence failures
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Message sent to the client in `save-error`
    pub fn client_message(&self) -> String {
        match self {
            Self::Io { source, .. } => format!("FileSystem write failed: {}", source),
            Self::Json(err) => format!("FileSystem write failed: {}", err),
        }
    }
}

/// HTTP-level errors
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. refused origin)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Store(StoreError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error message returned to the caller
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Store(err) => err.to_string(),
        }
    }
}
