/**
 * Authentication Handler Types
 *
 * Result types of the login handler. The wire payloads (`LoginRequest`,
 * `LoginSuccess`) live in `shared::event`; these types carry what the
 * gateway needs on top of them.
 */

use crate::backend::auth::sessions::Claims;
use crate::shared::LoginSuccess;

/// Which branch of the login flow succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginKind {
    /// The invited account had no password; this login set it
    Activated,
    /// The password matched the stored hash
    Returning,
}

impl LoginKind {
    pub fn message(&self) -> &'static str {
        match self {
            LoginKind::Activated => "Account Activated!",
            LoginKind::Returning => "Welcome back.",
        }
    }
}

/// Successful login
#[derive(Debug, Clone)]
pub struct LoginGrant {
    pub token: String,
    pub claims: Claims,
    pub kind: LoginKind,
}

impl LoginGrant {
    /// Payload for `login-success`
    pub fn to_success(&self) -> LoginSuccess {
        LoginSuccess {
            token: self.token.clone(),
            message: self.kind.message().to_string(),
        }
    }
}
