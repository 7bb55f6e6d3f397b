//! Markdown book notes: the canonical frontmatter model, document
//! parse/render, and the metadata reconciler.

mod document;
mod error;
mod frontmatter;
mod models;
mod reconcile;

pub use document::Document;
pub use error::NoteError;
pub use frontmatter::{normalize_mapping, parse_frontmatter, split_document};
pub use models::{Frontmatter, Genre};
pub use reconcile::{reconcile, Action};

pub type Result<T> = std::result::Result<T, NoteError>;
