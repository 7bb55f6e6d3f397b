use serde::{Deserialize, Serialize};

/// One shelf's RSS feed location.
#[derive(Debug, Clone)]
pub struct ShelfFeed {
    base_url: String,
    user_id: String,
    key: String,
    shelf: String,
}

impl ShelfFeed {
    pub fn new(
        base_url: impl Into<String>,
        user_id: impl Into<String>,
        key: impl Into<String>,
        shelf: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            user_id: user_id.into(),
            key: key.into(),
            shelf: shelf.into(),
        }
    }

    /// Shelf name this feed covers
    pub fn shelf(&self) -> &str {
        &self.shelf
    }

    /// Full RSS URL for this shelf
    pub fn url(&self) -> String {
        format!(
            "{}/review/list_rss/{}?key={}&shelf={}",
            self.base_url.trim_end_matches('/'),
            self.user_id,
            self.key,
            self.shelf
        )
    }
}

/// One book entry from a shelf feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Raw title as supplied by the feed, series marker and all
    pub title: String,
    pub author_name: String,
    /// Source-internal book identifier
    pub book_id: String,
    /// HTML-formatted description
    pub book_description: String,
    /// Cover image URL
    pub cover_url: String,
    /// Comma-separated shelf tags
    pub user_shelves: String,
    /// Star rating as reported by the feed ("0" when unrated)
    pub user_rating: String,
    /// Read-completion timestamp, RFC-822 style
    pub user_read_at: String,
}

impl FeedEntry {
    /// Shelf tags as a trimmed list
    pub fn shelves(&self) -> Vec<&str> {
        self.user_shelves
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_feed_url() {
        let feed = ShelfFeed::new("https://example.com/", "123", "secret", "read");
        assert_eq!(
            feed.url(),
            "https://example.com/review/list_rss/123?key=secret&shelf=read"
        );
    }

    #[test]
    fn test_shelves_list() {
        let entry = FeedEntry {
            user_shelves: "read, owned,non-fiction , ".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.shelves(), vec!["read", "owned", "non-fiction"]);
    }

    #[test]
    fn test_shelves_list_empty() {
        let entry = FeedEntry::default();
        assert!(entry.shelves().is_empty());
    }
}
