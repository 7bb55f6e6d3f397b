use reqwest::Client;

use crate::error::FeedError;
use crate::models::{FeedEntry, ShelfFeed};
use crate::parsers::parse_shelf_feed;

/// Shelf feed fetcher client
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a new FeedClient with a default reqwest Client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new FeedClient with a custom reqwest Client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch and parse one shelf's feed
    ///
    /// # Arguments
    /// * `feed` - The shelf feed to fetch
    ///
    /// # Returns
    /// A vector of parsed feed entries
    pub async fn fetch(&self, feed: &ShelfFeed) -> crate::Result<Vec<FeedEntry>> {
        let url = feed.url();
        tracing::debug!("Fetching shelf feed from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Parse(format!(
                "HTTP {} when fetching {}",
                status, url
            )));
        }

        let bytes = response.bytes().await?;
        let entries = parse_shelf_feed(&bytes)?;

        tracing::debug!("Parsed {} entries from shelf feed", entries.len());
        Ok(entries)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}
