/**
 * Login Handler
 *
 * Handles `attempt-login` for the gateway.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. No stored hash: the account was invited and never activated, so this
 *    login sets the password (bcrypt, cost 10 by default) and succeeds
 * 3. Stored hash: verify the password with bcrypt
 * 4. Issue a 24 hour JWT
 *
 * # Security
 *
 * Activation needs nothing but the username: whoever logs in first sets
 * the password. There is no separate registration or reset flow. This is
 * kept behind `activate_or_authenticate` so callers do not depend on it.
 *
 * bcrypt work runs on the blocking pool so it never stalls the event loop.
 */

use std::fmt::Display;

use crate::backend::auth::handlers::types::{LoginGrant, LoginKind};
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::UserStore;
use crate::backend::error::AuthError;
use crate::shared::LoginRequest;

/// Activate an invited account or authenticate an existing one
///
/// # Errors
///
/// * `AuthError::UserNotFound` - no user with this username
/// * `AuthError::InvalidCredentials` - password does not match the stored hash
/// * `AuthError::Server` - store, hashing or signing failure (detail is logged)
pub async fn activate_or_authenticate(
    users: &UserStore,
    sessions: &SessionKeys,
    password_cost: u32,
    request: LoginRequest,
) -> Result<LoginGrant, AuthError> {
    let LoginRequest { username, password } = request;

    let user = users
        .find_by_username(&username)
        .await
        .map_err(|e| server_error("user lookup failed", e))?
        .ok_or_else(|| {
            tracing::warn!("[Auth] User not found: {}", username);
            AuthError::UserNotFound
        })?;

    let (user, kind) = match user.password_hash.clone() {
        None => {
            let hash = hash_password(password, password_cost).await?;
            let user = users
                .create_or_activate(&user.username, Some(hash))
                .await
                .map_err(|e| server_error("activation failed", e))?;
            tracing::info!("[Auth] Account activated: {}", user.username);
            (user, LoginKind::Activated)
        }
        Some(stored_hash) => {
            if !verify_password(password, stored_hash).await? {
                tracing::warn!("[Auth] Invalid password for user: {}", user.username);
                return Err(AuthError::InvalidCredentials);
            }
            tracing::info!("[Auth] User logged in: {}", user.username);
            (user, LoginKind::Returning)
        }
    };

    let (token, claims) = sessions
        .issue(&user)
        .map_err(|e| server_error("token signing failed", e))?;

    Ok(LoginGrant { token, claims, kind })
}

async fn hash_password(password: String, cost: u32) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| server_error("hashing task failed", e))?
        .map_err(|e| server_error("password hashing failed", e))
}

async fn verify_password(password: String, stored_hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(|e| server_error("verification task failed", e))?
        .map_err(|e| server_error("password verification failed", e))
}

fn server_error(context: &str, err: impl Display) -> AuthError {
    tracing::error!("[Auth] {}: {}", context, err);
    AuthError::Server(format!("{}: {}", context, err))
}
