mod client;
mod error;
pub mod models;
mod parsers;

pub use client::FeedClient;
pub use error::FeedError;
pub use models::{FeedEntry, ShelfFeed};

pub type Result<T> = std::result::Result<T, FeedError>;
