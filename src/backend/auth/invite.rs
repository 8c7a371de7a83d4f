/**
 * Member Invitation
 *
 * Creates invited (password-less) accounts for a list of usernames. Each
 * name is handled independently: existing accounts are skipped and store
 * failures are reported without stopping the rest of the batch.
 */

use crate::backend::auth::users::UserStore;
use crate::backend::error::StoreError;

/// Outcome of an invitation run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InviteReport {
    /// Newly created accounts
    pub invited: Vec<String>,
    /// Names that already had an account
    pub skipped: Vec<String>,
    /// Names whose insert failed, with the error text
    pub failed: Vec<(String, String)>,
}

impl InviteReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Invite every name in `names`
///
/// Blank names are ignored and surrounding whitespace is trimmed.
pub async fn invite_users<I, S>(store: &UserStore, names: I) -> InviteReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = InviteReport::default();

    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }

        match store.create_or_activate(name, None).await {
            Ok(user) => {
                tracing::info!("[Invite] Invited {} ({})", user.username, user.id);
                report.invited.push(user.username);
            }
            Err(StoreError::Conflict { username }) => {
                tracing::info!("[Invite] {} already has an account, skipping", username);
                report.skipped.push(username);
            }
            Err(e) => {
                tracing::error!("[Invite] Failed to invite {}: {}", name, e);
                report.failed.push((name.to_string(), e.to_string()));
            }
        }
    }

    report
}
