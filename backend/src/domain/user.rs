//! User account model.
//!
//! A user is registered once from a [`UserCandidate`], persisted as a
//! [`NewUserRecord`] carrying only the credential hash, and read back as a
//! [`User`] with a store-assigned [`UserId`].

use std::fmt;

use uuid::Uuid;
use zeroize::Zeroizing;

use super::CredentialHash;

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an identifier produced by a store.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable, human-facing part of an account.
///
/// Profile updates replace all of these fields at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: i32,
}

/// Registration input that has not been validated or persisted yet.
///
/// The plaintext password lives in a zeroizing buffer and is dropped once the
/// candidate has been hashed.
#[derive(Debug, Clone)]
pub struct UserCandidate {
    pub profile: UserProfile,
    pub password: Zeroizing<String>,
    pub is_admin: bool,
}

impl UserCandidate {
    pub fn new(profile: UserProfile, password: impl Into<String>, is_admin: bool) -> Self {
        Self {
            profile,
            password: Zeroizing::new(password.into()),
            is_admin,
        }
    }

    /// Plaintext password supplied at registration.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Account ready to be inserted; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub profile: UserProfile,
    pub is_admin: bool,
    pub password_hash: CredentialHash,
}

/// Persisted user account.
///
/// ## Invariants
/// - `password_hash` is always a credential hash, never plaintext.
/// - `is_admin` and `password_hash` do not change after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    profile: UserProfile,
    is_admin: bool,
    password_hash: CredentialHash,
}

impl User {
    pub fn new(id: UserId, record: NewUserRecord) -> Self {
        let NewUserRecord {
            profile,
            is_admin,
            password_hash,
        } = record;
        Self {
            id,
            profile,
            is_admin,
            password_hash,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn username(&self) -> &str {
        self.profile.username.as_str()
    }

    pub fn email(&self) -> &str {
        self.profile.email.as_str()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn password_hash(&self) -> &CredentialHash {
        &self.password_hash
    }

    /// Replace the profile fields, leaving credentials and role untouched.
    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn profile() -> UserProfile {
        UserProfile {
            username: "john".into(),
            name: "John".into(),
            surname: "Jack".into(),
            email: "john@mail.com".into(),
            age: 30,
        }
    }

    #[rstest]
    fn with_profile_keeps_credentials_and_role(profile: UserProfile) {
        let id = UserId::random();
        let user = User::new(
            id,
            NewUserRecord {
                profile: profile.clone(),
                is_admin: true,
                password_hash: CredentialHash::new("$2b$04$hash"),
            },
        );

        let updated = user.with_profile(UserProfile {
            username: "johnny".into(),
            ..profile
        });

        assert_eq!(updated.id(), id);
        assert_eq!(updated.username(), "johnny");
        assert!(updated.is_admin());
        assert_eq!(updated.password_hash().as_str(), "$2b$04$hash");
    }

    #[rstest]
    fn candidate_exposes_password(profile: UserProfile) {
        let candidate = UserCandidate::new(profile, "asdf1234.-", false);
        assert_eq!(candidate.password(), "asdf1234.-");
    }
}
