// tests/crypto_tests.rs
use encrypted_note_vault::error::CoreError;
use encrypted_note_vault::{generate_key, Cipher};

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let cipher = Cipher::new(&generate_key());

    let token = cipher.encrypt("Attack at dawn!").unwrap();
    assert_ne!(token, "Attack at dawn!");
    assert_eq!(cipher.decrypt(&token).unwrap(), "Attack at dawn!");
}

#[test]
fn test_roundtrip_empty_and_unicode() {
    let cipher = Cipher::new(&generate_key());

    let empty = cipher.encrypt("").unwrap();
    assert_eq!(cipher.decrypt(&empty).unwrap(), "");

    let text = "заметка №1 — café ☕";
    let token = cipher.encrypt(text).unwrap();
    assert_eq!(cipher.decrypt(&token).unwrap(), text);
}

#[test]
fn test_same_plaintext_yields_distinct_tokens() {
    let cipher = Cipher::new(&generate_key());

    let a = cipher.encrypt("same input").unwrap();
    let b = cipher.encrypt("same input").unwrap();

    // Random nonce per call
    assert_ne!(a, b);
    assert_eq!(cipher.decrypt(&a).unwrap(), "same input");
    assert_eq!(cipher.decrypt(&b).unwrap(), "same input");
}

#[test]
fn test_decrypt_fails_with_wrong_key() {
    let cipher = Cipher::new(&generate_key());
    let other = Cipher::new(&generate_key());

    let token = cipher.encrypt("secret").unwrap();
    let result = other.decrypt(&token);

    assert!(matches!(result, Err(CoreError::Decryption(_))));
}

#[test]
fn test_decrypt_fails_on_tampered_token() {
    let cipher = Cipher::new(&generate_key());
    let token = cipher.encrypt("secret").unwrap();

    // Flip the first base64 character without breaking the alphabet
    let mut chars: Vec<char> = token.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    assert!(matches!(
        cipher.decrypt(&tampered),
        Err(CoreError::Decryption(_))
    ));
}

#[test]
fn test_decrypt_rejects_malformed_tokens() {
    let cipher = Cipher::new(&generate_key());

    // Not base64 at all
    assert!(matches!(
        cipher.decrypt("!!! not a token !!!"),
        Err(CoreError::Decryption(_))
    ));

    // Valid base64 but shorter than a nonce
    assert!(matches!(
        cipher.decrypt("AAAA"),
        Err(CoreError::Decryption(_))
    ));

    assert!(matches!(
        cipher.decrypt(""),
        Err(CoreError::Decryption(_))
    ));
}

#[test]
fn test_passphrase_derivation_is_deterministic() {
    let a = Cipher::from_passphrase("correct horse battery staple");
    let b = Cipher::from_passphrase("correct horse battery staple");

    let token = a.encrypt("shared secret").unwrap();
    assert_eq!(b.decrypt(&token).unwrap(), "shared secret");

    let c = Cipher::from_passphrase("different passphrase");
    assert!(matches!(c.decrypt(&token), Err(CoreError::Decryption(_))));
}
