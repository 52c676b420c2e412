// src/crypto.rs
//! Symmetric cipher for note bodies and stored credentials
//!
//! Tokens are `base64url_no_pad(nonce || ciphertext || tag)` with a fresh
//! random nonce per encryption. Decryption is authenticated: a token made
//! with another key, or with flipped bytes, fails instead of returning
//! garbage.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::aliases::{CipherKey32, RandomCipherKey32, SecureRandomExt};
use crate::consts::NONCE_LEN;
use crate::error::CoreError;
use crate::Result;

/// Generate a new random 256-bit cipher key
#[inline]
pub fn generate_key() -> CipherKey32 {
    CipherKey32::new(**RandomCipherKey32::new())
}

/// Process-wide symmetric cipher, keyed once at construction
pub struct Cipher {
    aead: Aes256Gcm,
}

impl Cipher {
    pub fn new(key: &CipherKey32) -> Self {
        let aead = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret().as_slice()));
        Self { aead }
    }

    /// Derive the key from a passphrase (SHA-256) — how the configured
    /// secret becomes key material
    pub fn from_passphrase(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        Self::new(&CipherKey32::new(digest.into()))
    }

    /// Key material from config, or from `ENOTE_CIPHER_KEY` when dev keys
    /// are disabled
    pub fn from_config() -> Self {
        let config = crate::config::load();

        let passphrase: &str = if config.features.use_dev_keys {
            config.keys.cipher_key.as_str()
        } else {
            Box::leak(
                std::env::var("ENOTE_CIPHER_KEY")
                    .expect("ENOTE_CIPHER_KEY required")
                    .into_boxed_str(),
            )
        };

        Self::from_passphrase(passphrase)
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);

        let ciphertext = self
            .aead
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
            .map_err(|_| CoreError::Decryption("aead failure".into()))?;

        let mut token = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        token.extend_from_slice(&nonce_bytes);
        token.extend_from_slice(&ciphertext);
        Ok(URL_SAFE_NO_PAD.encode(token))
    }

    pub fn decrypt(&self, token: &str) -> Result<String> {
        let raw = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| CoreError::Decryption("malformed token".into()))?;
        if raw.len() < NONCE_LEN {
            return Err(CoreError::Decryption("token too short".into()));
        }

        let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LEN);
        let plaintext = self
            .aead
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| CoreError::Decryption("authentication failed".into()))?;

        String::from_utf8(plaintext).map_err(|_| CoreError::Decryption("invalid utf-8".into()))
    }
}
