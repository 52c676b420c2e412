// src/db/mod.rs
//! Data store — schema ownership and parameterized query operations
//!
//! Every logical operation opens, uses, and closes its own connection; the
//! save/update paths in the note service wrap several ops in one transaction
//! through the `&Connection` deref of `rusqlite::Transaction`.

pub mod conn;
pub mod ops;

pub use conn::{default_db_path, open_notes_db};
pub use ops::{
    add_note, add_note_tag, add_user, clear_note_tags, delete_note_by_title_and_user_id,
    filter_notes_by_category, filter_notes_by_tag, get_categories_by_user_id,
    get_note_by_title_and_user_id, get_notes_by_user_id, get_notes_with_content_by_user_id,
    get_or_create_category, get_or_create_tag, get_tags_by_user_id, get_user_by_username,
    update_note, NoteDetail, NoteRecord, NoteSummary,
};
