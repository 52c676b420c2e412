// src/credentials.rs
//! One-way password hashing with per-user salts
//!
//! The stored shape is `salt$digest`, encrypted as a whole before it ever
//! touches the database. Digests are never reversed — login re-hashes the
//! presented password under the stored salt and compares.

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::consts::{CREDENTIAL_SEPARATOR, SALT_LEN};
use crate::error::CoreError;
use crate::Result;

/// Fresh random salt, hex-encoded
pub fn generate_salt() -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    hex::encode(salt)
}

/// Deterministic salted digest: `sha256(salt || password)` as lowercase hex
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Salt + digest pair as persisted (inside the cipher envelope)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub salt: String,
    pub digest: String,
}

impl StoredCredential {
    /// Hash a new password under a fresh salt
    pub fn new(password: &str) -> Self {
        let salt = generate_salt();
        let digest = hash_password(password, &salt);
        Self { salt, digest }
    }

    pub fn verify(&self, password: &str) -> bool {
        hash_password(password, &self.salt) == self.digest
    }

    pub fn encode(&self) -> String {
        format!("{}{}{}", self.salt, CREDENTIAL_SEPARATOR, self.digest)
    }

    /// Parse the decrypted stored form. A missing separator means the
    /// plaintext was never produced by `encode` — treated as tampering.
    pub fn parse(raw: &str) -> Result<Self> {
        let (salt, digest) = raw
            .split_once(CREDENTIAL_SEPARATOR)
            .ok_or_else(|| CoreError::Decryption("malformed credential".into()))?;
        if salt.is_empty() || digest.is_empty() {
            return Err(CoreError::Decryption("malformed credential".into()));
        }
        Ok(Self {
            salt: salt.to_string(),
            digest: digest.to_string(),
        })
    }
}
