use chrono::DateTime;

use feed::FeedEntry;
use note::{Frontmatter, Genre};
use parser::{normalize_shelf, parse_title};

/// Feed timestamp format, RFC-822 style ("Fri, 07 Nov 2025 00:00:00 -0800")
const READ_AT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Shelf tags that describe the format of a copy
const FORMAT_TAGS: &[&str] = &["hardback", "paperback", "ebook", "kindle", "audiobook"];

/// Fully derived metadata for one book: where its note lives and what
/// goes in it.
#[derive(Debug, Clone)]
pub struct BookRecord {
    pub clean_title: String,
    pub book_id: String,
    pub frontmatter: Frontmatter,
    /// Note body, carried verbatim from the feed description
    pub body: String,
}

/// Derive fresh note metadata from one feed entry.
///
/// Total per-entry derivation: unparseable pieces degrade to absent fields
/// rather than failing the entry. `updated` is left unset; the service
/// stamps it only when a write actually happens.
pub fn build_metadata(entry: &FeedEntry, shelf: &str) -> BookRecord {
    let parsed = parse_title(&entry.title);
    let shelves = entry.shelves();

    let frontmatter = Frontmatter {
        author: if entry.author_name.is_empty() {
            Vec::new()
        } else {
            vec![entry.author_name.clone()]
        },
        book_id: Some(entry.book_id.clone()),
        book_description: non_empty(&entry.book_description),
        cover: non_empty(&entry.cover_url),
        date_last_read: parse_read_at(&entry.user_read_at, &entry.title),
        format: shelves
            .iter()
            .filter(|tag| FORMAT_TAGS.contains(tag))
            .map(|tag| tag.to_string())
            .collect(),
        genre: detect_genre(&shelves),
        owned: Some(shelves.contains(&"owned")),
        rating: parse_rating(&entry.user_rating),
        re_read: Some(shelves.contains(&"re-read")),
        series_name: non_empty(&parsed.series_name),
        series_number: non_empty(&parsed.series_number),
        status: Some(normalize_shelf(shelf)),
        subtitle: non_empty(&parsed.subtitle),
        updated: None,
        extra: Default::default(),
    };

    BookRecord {
        clean_title: parsed.title,
        book_id: entry.book_id.clone(),
        frontmatter,
        body: entry.book_description.clone(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Genre from the shelf tags; `non-fiction` is checked first so both tags
/// at once resolve the same way every run.
fn detect_genre(shelves: &[&str]) -> Option<Genre> {
    if shelves.contains(&"non-fiction") {
        Some(Genre::NonFiction)
    } else if shelves.contains(&"fiction") {
        Some(Genre::Fiction)
    } else {
        None
    }
}

/// Star rating 1-5; "0" means unrated
fn parse_rating(raw: &str) -> Option<u8> {
    match raw.trim().parse::<u8>() {
        Ok(rating @ 1..=5) => Some(rating),
        _ => None,
    }
}

/// Parse the feed's read-completion timestamp down to a date.
///
/// Unparseable timestamps degrade to an absent date; the entry itself
/// still syncs.
fn parse_read_at(raw: &str, title: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match DateTime::parse_from_str(raw, READ_AT_FORMAT) {
        Ok(read_at) => Some(read_at.format("%Y-%m-%d").to_string()),
        Err(e) => {
            tracing::warn!("Unparseable read timestamp '{}' for '{}': {}", raw, title, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> FeedEntry {
        FeedEntry {
            title: "Foundation (Foundation, #1)".to_string(),
            author_name: "Isaac Asimov".to_string(),
            book_id: "29579".to_string(),
            book_description: "<i>Foundation</i> marks the first of a series.".to_string(),
            cover_url: "https://images.example.com/29579.jpg".to_string(),
            user_shelves: "read, owned, paperback, fiction".to_string(),
            user_rating: "5".to_string(),
            user_read_at: "Fri, 07 Nov 2025 00:00:00 -0800".to_string(),
        }
    }

    #[test]
    fn test_build_metadata() {
        let record = build_metadata(&entry(), "read");

        assert_eq!(record.clean_title, "Foundation");
        assert_eq!(record.book_id, "29579");
        assert_eq!(record.body, "<i>Foundation</i> marks the first of a series.");

        let fm = &record.frontmatter;
        assert_eq!(fm.author, vec!["Isaac Asimov".to_string()]);
        assert_eq!(fm.book_id.as_deref(), Some("29579"));
        assert_eq!(fm.series_name.as_deref(), Some("Foundation"));
        assert_eq!(fm.series_number.as_deref(), Some("1"));
        assert_eq!(fm.status.as_deref(), Some("read"));
        assert_eq!(fm.rating, Some(5));
        assert_eq!(fm.owned, Some(true));
        assert_eq!(fm.re_read, Some(false));
        assert_eq!(fm.genre, Some(Genre::Fiction));
        assert_eq!(fm.format, vec!["paperback".to_string()]);
        assert_eq!(fm.date_last_read.as_deref(), Some("2025-11-07"));
        assert_eq!(fm.subtitle, None);
        assert_eq!(fm.updated, None);
    }

    #[test]
    fn test_status_from_configured_shelf() {
        let record = build_metadata(&entry(), "to-read-mystery");
        assert_eq!(record.frontmatter.status.as_deref(), Some("to-read"));
    }

    #[test]
    fn test_unrated_and_unparseable_degrade() {
        let mut e = entry();
        e.user_rating = "0".to_string();
        e.user_read_at = "sometime last week".to_string();

        let record = build_metadata(&e, "read");
        assert_eq!(record.frontmatter.rating, None);
        assert_eq!(record.frontmatter.date_last_read, None);
    }

    #[test]
    fn test_non_fiction_wins_over_fiction() {
        let mut e = entry();
        e.user_shelves = "read, fiction, non-fiction".to_string();
        assert_eq!(
            build_metadata(&e, "read").frontmatter.genre,
            Some(Genre::NonFiction)
        );
    }

    #[test]
    fn test_missing_read_at_is_absent() {
        let mut e = entry();
        e.user_read_at = String::new();
        assert_eq!(build_metadata(&e, "read").frontmatter.date_last_read, None);
    }
}
