/**
 * Write Authorization Policy
 *
 * Decides whether a connection may write a document. The gateway records
 * the claims of the last successful `attempt-login` on each connection and
 * hands them to the policy before every document update.
 */

use std::fmt;
use std::str::FromStr;

use crate::backend::auth::sessions::Claims;

/// Message sent in `save-error` when a write is refused
pub const NOT_AUTHORIZED: &str = "Not authorized.";

/// Who may write documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationPolicy {
    /// Any connected client
    #[default]
    AllowAll,
    /// Only connections that logged in successfully
    RequireLogin,
}

impl AuthorizationPolicy {
    pub fn permits_write(&self, session: Option<&Claims>) -> bool {
        match self {
            Self::AllowAll => true,
            Self::RequireLogin => session.is_some(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllowAll => "allow-all",
            Self::RequireLogin => "require-login",
        }
    }
}

impl fmt::Display for AuthorizationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorizationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow-all" => Ok(Self::AllowAll),
            "require-login" => Ok(Self::RequireLogin),
            other => Err(format!(
                "unknown write policy '{}' (expected allow-all or require-login)",
                other
            )),
        }
    }
}
