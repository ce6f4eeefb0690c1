//! Credential primitives: stored hashes and login input.
//!
//! Handlers build [`LoginCredentials`] from raw strings before talking to a
//! port so that blank payloads never reach the store.

use std::fmt;

use zeroize::Zeroizing;

/// One-way credential hash as persisted by the user store.
///
/// `Debug` is redacted so hashes do not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(<redacted>)")
    }
}

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Neither a username nor an email was supplied.
    MissingIdentifier,
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentifier => write!(f, "username or email is required"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Which identifier the caller supplied; drives the not-found message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginIdentifier {
    Username,
    Email,
}

/// Validated login input.
///
/// ## Invariants
/// - At least one of `username` and `email` is non-empty after trimming.
/// - `password` is non-empty; whitespace is preserved.
///
/// # Examples
/// ```
/// use backend::domain::{LoginCredentials, LoginIdentifier};
///
/// let creds = LoginCredentials::try_from_parts("", "a@mail.com", "secret").unwrap();
/// assert_eq!(creds.identifier(), LoginIdentifier::Email);
/// assert_eq!(creds.email(), "a@mail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw request fields.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        let email = email.trim();
        if username.is_empty() && email.is_empty() {
            return Err(LoginValidationError::MissingIdentifier);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username as supplied; may be empty when logging in by email.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Email as supplied; may be empty when logging in by username.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// The username wins whenever it was supplied.
    pub fn identifier(&self) -> LoginIdentifier {
        if self.username.is_empty() {
            LoginIdentifier::Email
        } else {
            LoginIdentifier::Username
        }
    }
}
