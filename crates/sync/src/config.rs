use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Feed host used when `SHELF_FEED_BASE` is not set
pub const DEFAULT_FEED_BASE: &str = "https://www.goodreads.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("{0} must name at least one shelf")]
    NoShelves(&'static str),
}

/// Runtime configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_base: String,
    pub feed_key: String,
    pub user_id: String,
    pub notes_dir: PathBuf,
    pub shelves: Vec<String>,
}

impl Config {
    pub fn new(
        feed_key: impl Into<String>,
        user_id: impl Into<String>,
        notes_dir: impl AsRef<Path>,
        shelves: Vec<String>,
    ) -> Self {
        Self {
            feed_base: DEFAULT_FEED_BASE.to_string(),
            feed_key: feed_key.into(),
            user_id: user_id.into(),
            notes_dir: notes_dir.as_ref().to_path_buf(),
            shelves,
        }
    }

    /// Read configuration from the environment.
    ///
    /// Missing required variables are fatal: the caller exits before any
    /// shelf is processed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let feed_key = require("SHELF_FEED_KEY")?;
        let user_id = require("SHELF_FEED_USER")?;
        let notes_dir = PathBuf::from(require("NOTES_DIR")?);

        let shelves: Vec<String> = require("SHELVES")?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if shelves.is_empty() {
            return Err(ConfigError::NoShelves("SHELVES"));
        }

        let feed_base =
            env::var("SHELF_FEED_BASE").unwrap_or_else(|_| DEFAULT_FEED_BASE.to_string());

        Ok(Self {
            feed_base,
            feed_key,
            user_id,
            notes_dir,
            shelves,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
