//! Driving port for login.
//!
//! Inbound adapters call this port to check credentials without importing
//! the backing store or hashing engine, so handler tests can substitute a
//! double.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Resolve the account by username or email and verify its password.
    ///
    /// Unknown identifiers are `not_found`; a wrong password is
    /// `unauthorized`.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
