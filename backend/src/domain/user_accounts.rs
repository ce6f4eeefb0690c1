//! Account use cases: registration, login, lookups and profile updates.
//!
//! [`UserAccountService`] implements the user-facing driving ports on top of
//! a [`UserRepository`] and a [`CredentialHasher`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use super::ports::{
    CredentialHashError, CredentialHasher, LoginService, UserPersistenceError, UserRepository,
    UsersCommand, UsersQuery,
};
use super::validation::{validate_profile, validate_user};
use super::{
    Error, InvalidReason, LoginCredentials, LoginIdentifier, NewUserRecord, User, UserCandidate,
    UserProfile,
};

pub const USER_NOT_FOUND_MESSAGE: &str = "User could not be found.";
pub const USERNAME_NOT_FOUND_MESSAGE: &str = "Username could not be found.";
pub const EMAIL_NOT_FOUND_MESSAGE: &str = "Email could not be found.";
pub const WRONG_PASSWORD_MESSAGE: &str = "Password is not correct.";
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists.";

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { .. } => Error::conflict(USERNAME_TAKEN_MESSAGE),
    }
}

fn map_hash_error(error: CredentialHashError) -> Error {
    match error {
        CredentialHashError::PasswordTooLong { max_bytes } => Error::invalid_request(format!(
            "Password is too long. There should be at most {max_bytes} bytes."
        ))
        .with_details(json!({ "field": "password", "code": "password_too_long" })),
        CredentialHashError::PasswordContainsNul => {
            Error::invalid_request("Password cannot contain a NUL character.")
                .with_details(json!({ "field": "password", "code": "password_contains_nul" }))
        }
        CredentialHashError::Hashing { .. } => Error::internal(error.to_string()),
    }
}

fn reject(reason: InvalidReason) -> Error {
    reason
        .into_error()
        .unwrap_or_else(|| Error::internal("validation reported a defect without a cause"))
}

/// Account service implementing [`UsersCommand`], [`UsersQuery`] and
/// [`LoginService`].
pub struct UserAccountService<U: ?Sized, H: ?Sized> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U: ?Sized, H: ?Sized> Clone for UserAccountService<U, H> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<U, H> UserAccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
{
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }

    async fn find(&self, username: &str) -> Result<User, Error> {
        self.users
            .find_by_username(username)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<U, H> UsersCommand for UserAccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
{
    async fn register(&self, candidate: UserCandidate) -> Result<User, Error> {
        let (valid, reason) = validate_user(&candidate);
        if !valid {
            debug!(reason = reason.code(), "registration rejected");
            return Err(reject(reason));
        }

        let password_hash = self
            .hasher
            .hash(candidate.password())
            .await
            .map_err(map_hash_error)?;
        let UserCandidate {
            profile, is_admin, ..
        } = candidate;

        let user = self
            .users
            .create(NewUserRecord {
                profile,
                is_admin,
                password_hash,
            })
            .await
            .map_err(map_user_persistence_error)?;
        info!(username = user.username(), id = %user.id(), "user registered");
        Ok(user)
    }

    async fn update_profile(&self, username: &str, profile: UserProfile) -> Result<User, Error> {
        let existing = self.find(username).await?;

        let (valid, reason) = validate_profile(&profile);
        if !valid {
            return Err(reject(reason));
        }

        let updated = existing.with_profile(profile);
        self.users
            .save(&updated)
            .await
            .map_err(map_user_persistence_error)?;
        info!(id = %updated.id(), "user profile updated");
        Ok(updated)
    }
}

#[async_trait]
impl<U, H> UsersQuery for UserAccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
{
    async fn get_user(&self, username: &str) -> Result<User, Error> {
        self.find(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_persistence_error)
    }
}

#[async_trait]
impl<U, H> LoginService for UserAccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let found = self
            .users
            .find_by_username_or_email(credentials.username(), credentials.email())
            .await
            .map_err(map_user_persistence_error)?;

        let Some(user) = found else {
            debug!("login failed: unknown identifier");
            return Err(Error::not_found(match credentials.identifier() {
                LoginIdentifier::Username => USERNAME_NOT_FOUND_MESSAGE,
                LoginIdentifier::Email => EMAIL_NOT_FOUND_MESSAGE,
            }));
        };

        if self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
        {
            Ok(user)
        } else {
            debug!("login failed: password mismatch");
            Err(Error::unauthorized(WRONG_PASSWORD_MESSAGE))
        }
    }
}
