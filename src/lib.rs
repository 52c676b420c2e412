// src/lib.rs
//! encrypted-note-vault — encrypted-at-rest personal notes
//!
//! Features:
//! - AES-256-GCM note bodies and credentials
//! - Salted SHA-256 password digests
//! - Single SQLite database, schema created on open
//! - Per-user session caches with invalidate-on-write

pub mod aliases;
pub mod auth;
pub mod cache;
pub mod config;
pub mod consts;
pub mod credentials;
pub mod crypto;
pub mod db;
pub mod error;
pub mod notes;

// Re-export everything callers need at the crate root
pub use aliases::{CipherKey32, SecureConversionsExt, SecureRandomExt};
pub use auth::AuthService;
pub use config::load as load_config;
pub use crypto::{generate_key, Cipher};
pub use db::{NoteDetail, NoteRecord, NoteSummary};
pub use error::{CoreError, Result};
pub use notes::{NotePreview, NoteService};
