use std::fs;
use std::path::{Path, PathBuf};

use note::Document;

/// Resolve the destination path for a book's note.
///
/// The default is `<clean_title>.md` in the notes directory. When that file
/// already belongs to a *different* book — its frontmatter carries another
/// `book_id` — the book id is appended so distinct books never overwrite
/// each other.
pub fn resolve_note_path(notes_dir: &Path, clean_title: &str, book_id: &str) -> PathBuf {
    let stem = if clean_title.is_empty() {
        "Untitled"
    } else {
        clean_title
    };

    let default = notes_dir.join(format!("{}.md", stem));
    if belongs_to_other_book(&default, book_id) {
        return notes_dir.join(format!("{} ({}).md", stem, book_id));
    }
    default
}

/// True when the file exists, parses, and names a different book id.
/// Unreadable or fence-less files return false; the caller's load step
/// surfaces those as skips.
fn belongs_to_other_book(path: &Path, book_id: &str) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(doc) = Document::parse(&content) else {
        return false;
    };
    matches!(doc.frontmatter.book_id.as_deref(), Some(existing) if existing != book_id)
}
