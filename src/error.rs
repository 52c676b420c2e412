// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected input — empty required field, confirm mismatch, etc.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A unique column already holds this value
    #[error("{0} already exists")]
    Uniqueness(String),

    /// Token could not be decrypted — wrong key, tampering, or truncation
    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),
}
