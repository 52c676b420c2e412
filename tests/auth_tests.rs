// tests/auth_tests.rs
mod common;
use common::TestVault;

use encrypted_note_vault::error::CoreError;
use encrypted_note_vault::{generate_key, AuthService, Cipher};

#[test]
fn test_register_then_login_returns_stable_id() {
    let vault = TestVault::new();
    let auth = vault.auth();

    auth.register("alice", "secret1", "secret1").unwrap();

    let first = auth.login("alice", "secret1").unwrap();
    let second = auth.login("alice", "secret1").unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_login_rejects_wrong_password_and_unknown_user() {
    let vault = TestVault::new();
    let auth = vault.auth();

    auth.register("alice", "secret1", "secret1").unwrap();

    assert_eq!(auth.login("alice", "wrong").unwrap(), None);
    assert_eq!(auth.login("bob", "x").unwrap(), None);
}

#[test]
fn test_duplicate_username_fails_second_time() {
    let vault = TestVault::new();
    let auth = vault.auth();

    auth.register("alice", "secret1", "secret1").unwrap();
    let result = auth.register("alice", "other", "other");

    assert!(matches!(result, Err(CoreError::Uniqueness(_))));
}

#[test]
fn test_empty_fields_are_rejected() {
    let vault = TestVault::new();
    let auth = vault.auth();

    assert!(matches!(
        auth.register("", "pw", "pw"),
        Err(CoreError::Validation(_))
    ));
    assert!(matches!(
        auth.register("alice", "", ""),
        Err(CoreError::Validation(_))
    ));
    assert!(matches!(
        auth.login("", "pw"),
        Err(CoreError::Validation(_))
    ));
    assert!(matches!(
        auth.login("alice", ""),
        Err(CoreError::Validation(_))
    ));
}

#[test]
fn test_password_confirm_mismatch_is_rejected() {
    let vault = TestVault::new();
    let result = vault.auth().register("alice", "secret1", "secret2");

    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[test]
fn test_stored_password_is_encrypted_at_rest() {
    let vault = TestVault::new();
    vault.auth().register("alice", "secret1", "secret1").unwrap();

    let stored: String = vault
        .conn()
        .query_row(
            "SELECT password FROM users WHERE username = 'alice'",
            [],
            |row| row.get(0),
        )
        .unwrap();

    // Neither the raw password nor a bare salt$digest shape
    assert_ne!(stored, "secret1");
    assert!(!stored.contains('$'));

    // Only the process key recovers the salt$digest plaintext
    let plaintext = vault.cipher().decrypt(&stored).unwrap();
    assert!(plaintext.contains('$'));
}

#[test]
fn test_foreign_key_credential_is_treated_as_bad_login() {
    let vault = TestVault::new();
    vault.auth().register("alice", "secret1", "secret1").unwrap();

    // Same database, different process key: the stored credential no
    // longer decrypts, which must look like a wrong password
    let other = AuthService::new(vault.db_path.as_str(), Cipher::new(&generate_key()));
    assert_eq!(other.login("alice", "secret1").unwrap(), None);
}
