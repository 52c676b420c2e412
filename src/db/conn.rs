// src/db/conn.rs
use std::{env, fs, path::Path};

use rusqlite::{Connection, Result};

/// Database path from the environment, falling back to config
pub fn default_db_path() -> String {
    let config = crate::config::load();
    env::var("ENOTE_NOTES_DB").unwrap_or_else(|_| config.paths.notes_db.clone())
}

/// Open the notes database, creating the schema if absent.
///
/// Foreign keys are declared but deliberately not enforced: deleting a note
/// leaves its `note_tags` rows behind, and every user-scoped read joins
/// through `notes`, so the orphans stay invisible.
pub fn open_notes_db(db_path: &str) -> Result<Connection> {
    if let Some(parent) = Path::new(db_path).parent() {
        let _ = fs::create_dir_all(parent);
    }

    let conn = Connection::open(db_path)?;

    conn.execute_batch(
        r#"
        -- The bundled SQLite is compiled with SQLITE_DEFAULT_FOREIGN_KEYS=1,
        -- so spell out the intended default explicitly.
        PRAGMA foreign_keys = OFF;

        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            category_id INTEGER,
            FOREIGN KEY (user_id) REFERENCES users (id),
            FOREIGN KEY (category_id) REFERENCES categories (id),
            UNIQUE (title, user_id)
        );

        CREATE TABLE IF NOT EXISTS note_tags (
            note_id INTEGER NOT NULL,
            tag_id INTEGER NOT NULL,
            PRIMARY KEY (note_id, tag_id),
            FOREIGN KEY (note_id) REFERENCES notes (id),
            FOREIGN KEY (tag_id) REFERENCES tags (id)
        );
        "#,
    )?;

    Ok(conn)
}
