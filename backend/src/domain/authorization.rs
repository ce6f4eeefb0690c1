//! Admin gate for meetup creation.
//!
//! Holding an [`AdminGrant`] is the only way to create a meetup, so the gate
//! cannot be skipped by an adapter.

use std::sync::Arc;

use tracing::info;

use super::Error;
use super::ports::UserRepository;
use super::user_accounts::map_user_persistence_error;

/// Message returned for every refused creator, whether or not the account
/// exists.
pub const NOT_ADMIN_MESSAGE: &str =
    "You are not allowed to create a new meetup. Only admins can create a new meetup.";

/// Proof that the named account passed the admin check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGrant {
    username: String,
}

impl AdminGrant {
    pub(crate) fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}

/// Looks accounts up and compares their admin flag.
pub struct AdminGate<U: ?Sized> {
    users: Arc<U>,
}

impl<U: ?Sized> Clone for AdminGate<U> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<U> AdminGate<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// `true` only when the account exists and carries the admin flag.
    pub async fn is_admin(&self, username: &str) -> Result<bool, Error> {
        let user = self
            .users
            .find_by_username(username)
            .await
            .map_err(map_user_persistence_error)?;
        Ok(user.is_some_and(|user| user.is_admin()))
    }

    /// Issue a grant for `username`, or `forbidden` with [`NOT_ADMIN_MESSAGE`].
    pub async fn authorize(&self, username: &str) -> Result<AdminGrant, Error> {
        if self.is_admin(username).await? {
            Ok(AdminGrant::new(username))
        } else {
            info!(username, "meetup creation refused");
            Err(Error::forbidden(NOT_ADMIN_MESSAGE))
        }
    }
}
