use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use feed::{FeedClient, FeedEntry, ShelfFeed};
use note::{reconcile, Action, Document};

use crate::config::Config;
use crate::metadata::build_metadata;
use crate::notepath::resolve_note_path;
use crate::Result;

/// Per-run tallies, logged when the run completes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub created: usize,
    pub patched: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

/// Service that syncs reading-shelf feeds into Markdown notes.
///
/// Shelves are processed one at a time and entries one at a time. A failure
/// anywhere is logged and skips only the entry or shelf it belongs to;
/// notes written earlier in the run stay on disk.
pub struct SyncService {
    client: Arc<FeedClient>,
    config: Config,
}

impl SyncService {
    pub fn new(client: Arc<FeedClient>, config: Config) -> Self {
        Self { client, config }
    }

    /// Process every configured shelf once.
    pub async fn run(&self) -> SyncSummary {
        let mut summary = SyncSummary::default();
        for shelf in &self.config.shelves {
            self.process_shelf(shelf, &mut summary).await;
        }
        summary
    }

    /// Fetch one shelf's feed and process its entries in order.
    async fn process_shelf(&self, shelf: &str, summary: &mut SyncSummary) {
        tracing::debug!("Processing shelf: {}", shelf);

        let shelf_feed = ShelfFeed::new(
            &self.config.feed_base,
            &self.config.user_id,
            &self.config.feed_key,
            shelf,
        );

        let entries = match self.client.fetch(&shelf_feed).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("[{}] Shelf feed fetch failed: {}", shelf, e);
                return;
            }
        };

        for entry in entries {
            self.process_entry(shelf, &entry, summary);
        }
    }

    /// Reconcile one feed entry against its note on disk.
    pub fn process_entry(&self, shelf: &str, entry: &FeedEntry, summary: &mut SyncSummary) {
        let record = build_metadata(entry, shelf);
        let path = resolve_note_path(&self.config.notes_dir, &record.clean_title, &record.book_id);

        let existing = match load_existing(&path) {
            Ok(existing) => existing,
            Err(e) => {
                tracing::warn!("[{}] Skipping {}: {}", shelf, path.display(), e);
                summary.skipped += 1;
                return;
            }
        };

        let action = reconcile(
            existing.as_ref().map(|doc| &doc.frontmatter),
            &record.frontmatter,
        );

        match action {
            Action::CreateNew(mut frontmatter) => {
                frontmatter.updated = Some(timestamp());
                match write_note(&path, &Document::new(frontmatter, record.body)) {
                    Ok(()) => {
                        tracing::info!("[{}] Created {}", shelf, path.display());
                        summary.created += 1;
                    }
                    Err(e) => {
                        tracing::error!("[{}] Failed to write {}: {}", shelf, path.display(), e);
                        summary.skipped += 1;
                    }
                }
            }
            Action::Patch { mut merged, changed } => {
                merged.updated = Some(timestamp());
                match write_note(&path, &Document::new(merged, record.body)) {
                    Ok(()) => {
                        tracing::info!(
                            "[{}] Updated {} ({})",
                            shelf,
                            path.display(),
                            changed.join(", ")
                        );
                        summary.patched += 1;
                    }
                    Err(e) => {
                        tracing::error!("[{}] Failed to write {}: {}", shelf, path.display(), e);
                        summary.skipped += 1;
                    }
                }
            }
            Action::NoOp => {
                tracing::debug!("[{}] Unchanged: {}", shelf, path.display());
                summary.unchanged += 1;
            }
        }
    }
}

/// Load and parse the existing note, if any.
///
/// A missing file means the book is new; a file without a parseable
/// frontmatter fence is an error the caller surfaces as a skip.
fn load_existing(path: &Path) -> Result<Option<Document>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(Document::parse(&content)?))
}

fn write_note(path: &Path, doc: &Document) -> Result<()> {
    fs::write(path, doc.render()?)?;
    Ok(())
}

/// `updated` stamp, minute precision, UTC
fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M").to_string()
}
