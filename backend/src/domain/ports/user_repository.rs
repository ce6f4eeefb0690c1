//! Driven port for user account storage.
use async_trait::async_trait;

use crate::domain::{NewUserRecord, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already holds the username.
        DuplicateUsername { username: String } => "username already exists: {username}",
    }
}

/// Storage for user accounts.
///
/// Implementations own uniqueness of usernames and assignment of ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return it with its assigned id.
    async fn create(&self, record: NewUserRecord) -> Result<User, UserPersistenceError>;

    /// Persist the profile fields of an existing account.
    ///
    /// A missing account is reported as [`UserPersistenceError::Query`].
    async fn save(&self, user: &User) -> Result<(), UserPersistenceError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Return the first account, in creation order, whose username equals
    /// `username` or whose email equals `email`.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// All accounts in creation order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
