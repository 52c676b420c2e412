// src/notes.rs
//! Note service — save/update/delete/search/filter over encrypted notes
//!
//! Orchestrates the data store and the cipher. Multi-step writes (note row
//! plus tag links) run inside one transaction, so a failure mid-sequence
//! rolls everything back. Every write refreshes the owning user's session
//! cache before returning.

use rusqlite::Connection;
use tracing::error;

use crate::cache::SessionCache;
use crate::consts::{ALL_CATEGORIES, ALL_TAGS};
use crate::crypto::Cipher;
use crate::db::{self, NoteSummary};
use crate::error::CoreError;
use crate::Result;

/// A single note, decrypted for display
#[derive(Debug, Clone)]
pub struct NotePreview {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
}

pub struct NoteService {
    db_path: String,
    cipher: Cipher,
    cache: SessionCache,
}

impl NoteService {
    pub fn new(db_path: impl Into<String>, cipher: Cipher) -> Self {
        Self {
            db_path: db_path.into(),
            cipher,
            cache: SessionCache::new(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(db::default_db_path(), Cipher::from_config())
    }

    fn conn(&self) -> Result<Connection> {
        db::open_notes_db(&self.db_path).map_err(Into::into)
    }

    /// Notes for one user, in insertion order. Cached after the first read.
    pub fn list_notes(&mut self, user_id: i64) -> Result<Vec<NoteSummary>> {
        if let Some(notes) = self.cache.notes(user_id) {
            return Ok(notes.to_vec());
        }
        let notes = db::get_notes_by_user_id(&self.conn()?, user_id)?;
        self.cache.put_notes(user_id, notes.clone());
        Ok(notes)
    }

    /// Category names in use by this user's notes. Cached.
    pub fn list_categories(&mut self, user_id: i64) -> Result<Vec<String>> {
        if let Some(categories) = self.cache.categories(user_id) {
            return Ok(categories.to_vec());
        }
        let categories = db::get_categories_by_user_id(&self.conn()?, user_id)?;
        self.cache.put_categories(user_id, categories.clone());
        Ok(categories)
    }

    /// Tag names in use by this user's notes. Cached.
    pub fn list_tags(&mut self, user_id: i64) -> Result<Vec<String>> {
        if let Some(tags) = self.cache.tags(user_id) {
            return Ok(tags.to_vec());
        }
        let tags = db::get_tags_by_user_id(&self.conn()?, user_id)?;
        self.cache.put_tags(user_id, tags.clone());
        Ok(tags)
    }

    /// One note by its (title, user) key, content decrypted
    pub fn get_note(&self, title: &str, user_id: i64) -> Result<Option<NotePreview>> {
        let Some(detail) = db::get_note_by_title_and_user_id(&self.conn()?, title, user_id)? else {
            return Ok(None);
        };
        let content = self.cipher.decrypt(&detail.content)?;
        Ok(Some(NotePreview {
            id: detail.id,
            title: title.to_string(),
            content,
            category: detail.category,
        }))
    }

    /// Create a note with its category and tag links in one transaction.
    /// Blank tags are skipped; the rest are trimmed before linking.
    pub fn save_note(
        &mut self,
        user_id: i64,
        title: &str,
        content: &str,
        category: &str,
        tags: &[String],
    ) -> Result<i64> {
        require_title_and_content(title, content)?;

        let token = self.cipher.encrypt(content)?;
        let mut conn = self.conn()?;
        let result = (|| -> Result<i64> {
            let tx = conn.transaction()?;
            let category_id = db::get_or_create_category(&tx, category)?;
            let note_id = db::add_note(&tx, user_id, title, &token, Some(category_id))?;
            link_tags(&tx, note_id, tags)?;
            tx.commit()?;
            Ok(note_id)
        })();

        let note_id =
            result.inspect_err(|err| error!(%err, user_id, title, "saving note failed"))?;
        self.refresh(user_id)?;
        Ok(note_id)
    }

    /// Replace title, content, and category, and re-link tags to exactly
    /// the supplied set — an empty slice clears the note's links.
    pub fn update_note(
        &mut self,
        user_id: i64,
        note_id: i64,
        title: &str,
        content: &str,
        category: &str,
        tags: &[String],
    ) -> Result<()> {
        require_title_and_content(title, content)?;

        let token = self.cipher.encrypt(content)?;
        let mut conn = self.conn()?;
        let result = (|| -> Result<()> {
            let tx = conn.transaction()?;
            let category_id = db::get_or_create_category(&tx, category)?;
            db::update_note(&tx, note_id, title, &token, Some(category_id))?;
            db::clear_note_tags(&tx, note_id)?;
            link_tags(&tx, note_id, tags)?;
            tx.commit()?;
            Ok(())
        })();

        result.inspect_err(|err| error!(%err, user_id, note_id, "updating note failed"))?;
        self.refresh(user_id)
    }

    /// Delete by (title, user). Tag links of the deleted note stay behind
    /// as orphans; nothing reads them once the note row is gone.
    pub fn delete_note(&mut self, user_id: i64, title: &str) -> Result<()> {
        let conn = self.conn()?;
        db::delete_note_by_title_and_user_id(&conn, title, user_id)
            .inspect_err(|err| error!(%err, user_id, title, "deleting note failed"))?;
        self.refresh(user_id)
    }

    /// Case-insensitive substring match over title OR decrypted content.
    /// Decrypts every note on every call; reads the store directly.
    pub fn search_notes(&self, user_id: i64, query: &str) -> Result<Vec<String>> {
        let needle = query.to_lowercase();
        let notes = db::get_notes_with_content_by_user_id(&self.conn()?, user_id)?;

        let mut matches = Vec::new();
        for note in notes {
            if note.title.to_lowercase().contains(&needle) {
                matches.push(note.title);
                continue;
            }
            let content = self.cipher.decrypt(&note.content)?;
            if content.to_lowercase().contains(&needle) {
                matches.push(note.title);
            }
        }
        Ok(matches)
    }

    /// Notes in one category; the sentinel returns the full listing
    pub fn filter_notes(&mut self, user_id: i64, category: &str) -> Result<Vec<NoteSummary>> {
        if category == ALL_CATEGORIES {
            return self.list_notes(user_id);
        }
        db::filter_notes_by_category(&self.conn()?, user_id, category)
    }

    /// Notes carrying one tag; the sentinel returns the full listing
    pub fn filter_notes_by_tag(&mut self, user_id: i64, tag: &str) -> Result<Vec<NoteSummary>> {
        if tag == ALL_TAGS {
            return self.list_notes(user_id);
        }
        db::filter_notes_by_tag(&self.conn()?, user_id, tag)
    }

    /// Reload all three listings for one user — the invalidate-on-write
    /// half of the cache contract
    fn refresh(&mut self, user_id: i64) -> Result<()> {
        self.cache.invalidate(user_id);
        let conn = self.conn()?;
        let notes = db::get_notes_by_user_id(&conn, user_id)?;
        let categories = db::get_categories_by_user_id(&conn, user_id)?;
        let tags = db::get_tags_by_user_id(&conn, user_id)?;
        self.cache.put_notes(user_id, notes);
        self.cache.put_categories(user_id, categories);
        self.cache.put_tags(user_id, tags);
        Ok(())
    }
}

fn require_title_and_content(title: &str, content: &str) -> Result<()> {
    if title.is_empty() || content.is_empty() {
        return Err(CoreError::Validation(
            "title and content are required".into(),
        ));
    }
    Ok(())
}

fn link_tags(conn: &Connection, note_id: i64, tags: &[String]) -> Result<()> {
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        let tag_id = db::get_or_create_tag(conn, tag)?;
        db::add_note_tag(conn, note_id, tag_id)?;
    }
    Ok(())
}
