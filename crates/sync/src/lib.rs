//! Shelf-to-notes sync orchestration.
//!
//! Ties the feed client, title parser, and note reconciler together into
//! the sequential per-shelf, per-entry processing loop.

mod config;
mod error;
mod metadata;
mod notepath;
mod service;

pub use config::{Config, ConfigError, DEFAULT_FEED_BASE};
pub use error::SyncError;
pub use metadata::{build_metadata, BookRecord};
pub use notepath::resolve_note_path;
pub use service::{SyncService, SyncSummary};

pub type Result<T> = std::result::Result<T, SyncError>;
