//! Driven port for one-way password hashing.
use async_trait::async_trait;

use crate::domain::CredentialHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised while deriving a credential hash.
    pub enum CredentialHashError {
        /// The hashing engine rejected the input or failed internally.
        Hashing { message: String } => "credential hashing failed: {message}",
        /// The password is longer than the engine reads.
        PasswordTooLong { max_bytes: usize } => "password exceeds {max_bytes} bytes",
        /// The password contains a NUL character.
        PasswordContainsNul => "password contains a NUL character",
    }
}

/// Salted, adaptive-cost password hashing.
///
/// Implementations must never log or return the plaintext.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Derive a salted hash of `plaintext`.
    ///
    /// Passwords the engine cannot hash without losing input are refused
    /// rather than truncated.
    async fn hash(&self, plaintext: &str) -> Result<CredentialHash, CredentialHashError>;

    /// Check `plaintext` against `hash`.
    ///
    /// Malformed hashes and engine failures yield `false`.
    async fn verify(&self, plaintext: &str, hash: &CredentialHash) -> bool;
}
