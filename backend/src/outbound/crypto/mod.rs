//! Credential hashing adapters.

mod bcrypt_hasher;

pub use bcrypt_hasher::{BCRYPT_MAX_PASSWORD_BYTES, BcryptCredentialHasher, DEFAULT_BCRYPT_COST};
