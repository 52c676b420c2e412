// tests/common.rs
//! Shared test fixtures — throwaway database + fresh random key per test

use encrypted_note_vault::db::open_notes_db;
use encrypted_note_vault::{generate_key, AuthService, Cipher, CipherKey32, NoteService};
use rusqlite::Connection;
use tempfile::TempDir;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Safe to call from every test — idempotent
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

#[allow(dead_code)] // Fields and helpers are used across the test binaries
pub struct TestVault {
    _dir: TempDir,
    pub db_path: String,
    pub key: CipherKey32,
}

#[allow(dead_code)]
impl TestVault {
    pub fn new() -> Self {
        setup();
        let dir = TempDir::new().expect("create temp dir");
        let db_path = dir
            .path()
            .join("notes.db")
            .to_str()
            .expect("utf-8 temp path")
            .to_string();
        Self {
            _dir: dir,
            db_path,
            key: generate_key(),
        }
    }

    pub fn cipher(&self) -> Cipher {
        Cipher::new(&self.key)
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.db_path.as_str(), self.cipher())
    }

    pub fn notes(&self) -> NoteService {
        NoteService::new(self.db_path.as_str(), self.cipher())
    }

    /// Raw connection for out-of-band assertions and writes
    pub fn conn(&self) -> Connection {
        open_notes_db(&self.db_path).expect("open notes db")
    }

    /// Register a user with a fixed password and hand back the id
    pub fn register_user(&self, username: &str) -> i64 {
        let auth = self.auth();
        auth.register(username, "hunter2", "hunter2")
            .expect("register");
        auth.login(username, "hunter2")
            .expect("login")
            .expect("user id")
    }
}
