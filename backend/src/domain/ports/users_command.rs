//! Driving port for account registration and profile changes.

use async_trait::async_trait;

use crate::domain::{Error, User, UserCandidate, UserProfile};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate, hash and store a new account.
    async fn register(&self, candidate: UserCandidate) -> Result<User, Error>;

    /// Replace the profile of `username`; password and admin flag are kept.
    async fn update_profile(&self, username: &str, profile: UserProfile) -> Result<User, Error>;
}
