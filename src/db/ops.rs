// src/db/ops.rs
//! Parameterized query operations over the five tables
//!
//! Free functions taking `&Connection`, so they compose inside a
//! transaction as well as standalone. Listing queries order by rowid —
//! stable insertion order.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::CoreError;
use crate::Result;

/// One row of a note listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
}

/// Listing row plus the encrypted content token — feeds search
#[derive(Debug, Clone)]
pub struct NoteRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Single note with its joined category name; `content` is still encrypted
#[derive(Debug, Clone)]
pub struct NoteDetail {
    pub id: i64,
    pub content: String,
    pub category: String,
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

pub fn get_user_by_username(conn: &Connection, username: &str) -> Result<Option<(i64, String)>> {
    conn.query_row(
        "SELECT id, password FROM users WHERE username = ?1",
        [username],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(Into::into)
}

/// Insert a new user; a taken username surfaces as `Uniqueness`
pub fn add_user(conn: &Connection, username: &str, stored_password: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?1, ?2)",
        params![username, stored_password],
    )
    .map_err(|err| {
        if is_unique_violation(&err) {
            CoreError::Uniqueness(format!("username '{username}'"))
        } else {
            err.into()
        }
    })?;
    Ok(())
}

/// Existing id if the name is known, else insert and return the new id.
/// `INSERT OR IGNORE` keeps this race-free even across processes.
pub fn get_or_create_category(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute("INSERT OR IGNORE INTO categories (name) VALUES (?1)", [name])?;
    conn.query_row("SELECT id FROM categories WHERE name = ?1", [name], |row| {
        row.get(0)
    })
    .map_err(Into::into)
}

pub fn get_or_create_tag(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute("INSERT OR IGNORE INTO tags (name) VALUES (?1)", [name])?;
    conn.query_row("SELECT id FROM tags WHERE name = ?1", [name], |row| {
        row.get(0)
    })
    .map_err(Into::into)
}

/// Insert a note and return its id; `content` must already be a cipher
/// token. A duplicate (title, user) pair surfaces as `Uniqueness`.
pub fn add_note(
    conn: &Connection,
    user_id: i64,
    title: &str,
    content: &str,
    category_id: Option<i64>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO notes (user_id, title, content, category_id) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, title, content, category_id],
    )
    .map_err(|err| {
        if is_unique_violation(&err) {
            CoreError::Uniqueness(format!("note '{title}'"))
        } else {
            err.into()
        }
    })?;
    Ok(conn.last_insert_rowid())
}

/// Full replace of the three mutable fields; affects zero rows on an
/// unknown id
pub fn update_note(
    conn: &Connection,
    note_id: i64,
    title: &str,
    content: &str,
    category_id: Option<i64>,
) -> Result<()> {
    conn.execute(
        "UPDATE notes SET title = ?1, content = ?2, category_id = ?3 WHERE id = ?4",
        params![title, content, category_id, note_id],
    )
    .map_err(|err| {
        if is_unique_violation(&err) {
            CoreError::Uniqueness(format!("note '{title}'"))
        } else {
            err.into()
        }
    })?;
    Ok(())
}

pub fn delete_note_by_title_and_user_id(
    conn: &Connection,
    title: &str,
    user_id: i64,
) -> Result<usize> {
    conn.execute(
        "DELETE FROM notes WHERE title = ?1 AND user_id = ?2",
        params![title, user_id],
    )
    .map_err(Into::into)
}

pub fn add_note_tag(conn: &Connection, note_id: i64, tag_id: i64) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO note_tags (note_id, tag_id) VALUES (?1, ?2)",
        params![note_id, tag_id],
    )?;
    Ok(())
}

pub fn clear_note_tags(conn: &Connection, note_id: i64) -> Result<()> {
    conn.execute("DELETE FROM note_tags WHERE note_id = ?1", [note_id])?;
    Ok(())
}

pub fn get_notes_by_user_id(conn: &Connection, user_id: i64) -> Result<Vec<NoteSummary>> {
    let mut stmt =
        conn.prepare("SELECT id, title FROM notes WHERE user_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map([user_id], |row| {
        Ok(NoteSummary {
            id: row.get(0)?,
            title: row.get(1)?,
        })
    })?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

pub fn get_notes_with_content_by_user_id(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<NoteRecord>> {
    let mut stmt =
        conn.prepare("SELECT id, title, content FROM notes WHERE user_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map([user_id], |row| {
        Ok(NoteRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
        })
    })?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

/// Distinct category names reachable through this user's notes
pub fn get_categories_by_user_id(conn: &Connection, user_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT c.name FROM notes n
         JOIN categories c ON n.category_id = c.id
         WHERE n.user_id = ?1 ORDER BY c.name",
    )?;
    let rows = stmt.query_map([user_id], |row| row.get(0))?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

/// Distinct tag names reachable through this user's notes
pub fn get_tags_by_user_id(conn: &Connection, user_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT t.name FROM notes n
         JOIN note_tags nt ON n.id = nt.note_id
         JOIN tags t ON nt.tag_id = t.id
         WHERE n.user_id = ?1 ORDER BY t.name",
    )?;
    let rows = stmt.query_map([user_id], |row| row.get(0))?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

/// A note with a NULL category does not come back — the join is inner,
/// and the save path always resolves a category anyway
pub fn get_note_by_title_and_user_id(
    conn: &Connection,
    title: &str,
    user_id: i64,
) -> Result<Option<NoteDetail>> {
    conn.query_row(
        "SELECT notes.id, notes.content, categories.name
         FROM notes
         JOIN categories ON notes.category_id = categories.id
         WHERE notes.title = ?1 AND notes.user_id = ?2",
        params![title, user_id],
        |row| {
            Ok(NoteDetail {
                id: row.get(0)?,
                content: row.get(1)?,
                category: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(Into::into)
}

pub fn filter_notes_by_tag(conn: &Connection, user_id: i64, tag: &str) -> Result<Vec<NoteSummary>> {
    let mut stmt = conn.prepare(
        "SELECT n.id, n.title FROM notes n
         JOIN note_tags nt ON n.id = nt.note_id
         JOIN tags t ON nt.tag_id = t.id
         WHERE n.user_id = ?1 AND t.name = ?2 ORDER BY n.id",
    )?;
    let rows = stmt.query_map(params![user_id, tag], |row| {
        Ok(NoteSummary {
            id: row.get(0)?,
            title: row.get(1)?,
        })
    })?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

pub fn filter_notes_by_category(
    conn: &Connection,
    user_id: i64,
    category: &str,
) -> Result<Vec<NoteSummary>> {
    let mut stmt = conn.prepare(
        "SELECT n.id, n.title FROM notes n
         JOIN categories c ON n.category_id = c.id
         WHERE n.user_id = ?1 AND c.name = ?2 ORDER BY n.id",
    )?;
    let rows = stmt.query_map(params![user_id, category], |row| {
        Ok(NoteSummary {
            id: row.get(0)?,
            title: row.get(1)?,
        })
    })?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}
