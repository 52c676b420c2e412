// src/cache.rs
//! Per-user read-through cache for note, category, and tag listings
//!
//! Contract: an entry fills on the first read through `NoteService` and is
//! replaced only by a service write for the same user. A writer that
//! bypasses the service (another process on the same database file) leaves
//! the cache stale until the next service write for that user. Access is
//! single-threaded by construction — every method takes `&self` or
//! `&mut self` on the owning service.

use std::collections::HashMap;

use crate::db::NoteSummary;

#[derive(Debug, Default)]
pub struct SessionCache {
    notes: HashMap<i64, Vec<NoteSummary>>,
    categories: HashMap<i64, Vec<String>>,
    tags: HashMap<i64, Vec<String>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self, user_id: i64) -> Option<&[NoteSummary]> {
        self.notes.get(&user_id).map(Vec::as_slice)
    }

    pub fn categories(&self, user_id: i64) -> Option<&[String]> {
        self.categories.get(&user_id).map(Vec::as_slice)
    }

    pub fn tags(&self, user_id: i64) -> Option<&[String]> {
        self.tags.get(&user_id).map(Vec::as_slice)
    }

    pub fn put_notes(&mut self, user_id: i64, notes: Vec<NoteSummary>) {
        self.notes.insert(user_id, notes);
    }

    pub fn put_categories(&mut self, user_id: i64, categories: Vec<String>) {
        self.categories.insert(user_id, categories);
    }

    pub fn put_tags(&mut self, user_id: i64, tags: Vec<String>) {
        self.tags.insert(user_id, tags);
    }

    /// Drop all three entries for one user — called on every service write
    pub fn invalidate(&mut self, user_id: i64) {
        self.notes.remove(&user_id);
        self.categories.remove(&user_id);
        self.tags.remove(&user_id);
    }
}
