// src/auth.rs
//! Registration and login on top of the data store and crypto primitives

use tracing::{error, warn};

use crate::credentials::StoredCredential;
use crate::crypto::Cipher;
use crate::db;
use crate::error::CoreError;
use crate::Result;

pub struct AuthService {
    db_path: String,
    cipher: Cipher,
}

impl AuthService {
    pub fn new(db_path: impl Into<String>, cipher: Cipher) -> Self {
        Self {
            db_path: db_path.into(),
            cipher,
        }
    }

    pub fn from_config() -> Self {
        Self::new(db::default_db_path(), Cipher::from_config())
    }

    /// Create a new account. The stored value is
    /// `encrypt("salt$digest")` — the database never sees a raw digest.
    pub fn register(&self, username: &str, password: &str, confirm: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(CoreError::Validation("all fields are required".into()));
        }
        if password != confirm {
            return Err(CoreError::Validation("passwords do not match".into()));
        }

        let credential = StoredCredential::new(password);
        let stored = self.cipher.encrypt(&credential.encode())?;

        let conn = db::open_notes_db(&self.db_path)?;
        db::add_user(&conn, username, &stored).inspect_err(|err| {
            if matches!(err, CoreError::Sql(_)) {
                error!(%err, username, "failed to add user");
            }
        })
    }

    /// Authenticate. `Ok(None)` covers unknown user, wrong password, and
    /// an undecryptable stored credential — the caller cannot tell them
    /// apart, only that the login was rejected.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<i64>> {
        if username.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "username and password are required".into(),
            ));
        }

        let conn = db::open_notes_db(&self.db_path)?;
        let Some((user_id, stored)) = db::get_user_by_username(&conn, username)
            .inspect_err(|err| error!(%err, username, "user lookup failed"))?
        else {
            return Ok(None);
        };

        let credential = match self
            .cipher
            .decrypt(&stored)
            .and_then(|raw| StoredCredential::parse(&raw))
        {
            Ok(credential) => credential,
            Err(err) => {
                // Wrong process key or tampered row — same outcome as a
                // wrong password from the user's point of view
                warn!(%err, username, "stored credential unusable");
                return Ok(None);
            }
        };

        if credential.verify(password) {
            Ok(Some(user_id))
        } else {
            Ok(None)
        }
    }
}
