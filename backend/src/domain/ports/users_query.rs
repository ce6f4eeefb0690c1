//! Driving port for reading user accounts.

use async_trait::async_trait;

use crate::domain::{Error, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch a single account; unknown usernames are `not_found`.
    async fn get_user(&self, username: &str) -> Result<User, Error>;

    /// All accounts in creation order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
