//! bcrypt-backed [`CredentialHasher`].
//!
//! Hashing and verification are CPU-bound, so both run on Tokio's blocking
//! pool. bcrypt reads at most 72 bytes of a NUL-terminated key, so longer
//! passwords and passwords containing NUL are refused at hash time and never
//! verify.

use async_trait::async_trait;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::ports::{CredentialHashError, CredentialHasher};
use crate::domain::{CredentialHash, TraceId};

/// Work factor used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 10;
/// Longest password bcrypt hashes without truncation.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

fn ensure_hashable(plaintext: &str) -> Result<(), CredentialHashError> {
    if plaintext.len() > BCRYPT_MAX_PASSWORD_BYTES {
        return Err(CredentialHashError::password_too_long(
            BCRYPT_MAX_PASSWORD_BYTES,
        ));
    }
    if plaintext.contains('\0') {
        return Err(CredentialHashError::password_contains_nul());
    }
    Ok(())
}

/// Salted adaptive hashing with a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptCredentialHasher {
    cost: u32,
}

impl BcryptCredentialHasher {
    /// Hasher using `cost` rounds (`4..=31`; bcrypt rejects other values at
    /// hash time).
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptCredentialHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

#[async_trait]
impl CredentialHasher for BcryptCredentialHasher {
    async fn hash(&self, plaintext: &str) -> Result<CredentialHash, CredentialHashError> {
        ensure_hashable(plaintext)?;
        let secret = Zeroizing::new(plaintext.to_owned());
        let cost = self.cost;
        let digest = TraceId::spawn_blocking(move || bcrypt::hash(secret.as_bytes(), cost))
            .await
            .map_err(|err| CredentialHashError::hashing(err.to_string()))?
            .map_err(|err| CredentialHashError::hashing(err.to_string()))?;

        if digest.is_empty() {
            return Err(CredentialHashError::hashing("bcrypt produced an empty hash"));
        }
        Ok(CredentialHash::new(digest))
    }

    async fn verify(&self, plaintext: &str, hash: &CredentialHash) -> bool {
        if ensure_hashable(plaintext).is_err() {
            return false;
        }
        let secret = Zeroizing::new(plaintext.to_owned());
        let stored = hash.as_str().to_owned();
        match TraceId::spawn_blocking(move || bcrypt::verify(secret.as_bytes(), &stored)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(err)) => {
                debug!(error = %err, "stored credential hash could not be parsed");
                false
            }
            Err(err) => {
                debug!(error = %err, "credential verification task failed");
                false
            }
        }
    }
}
