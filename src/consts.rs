// src/consts.rs
//! Shared constants — crypto parameters and filter sentinels

/// Salt length for password digests, in raw bytes (hex-encoded for storage)
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length prefixed to every token
pub const NONCE_LEN: usize = 12;

/// Separator between salt and digest in a stored credential
pub const CREDENTIAL_SEPARATOR: char = '$';

/// Category filter sentinel — "show everything"
pub const ALL_CATEGORIES: &str = "All categories";

/// Tag filter sentinel — "show everything"
pub const ALL_TAGS: &str = "All tags";
