// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical key types used throughout encrypted-note-vault.

pub use secure_gate::{fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(CipherKey32, 32); // 256-bit AES-GCM master key

// Random secrets
random_alias!(RandomCipherKey32, 32);
