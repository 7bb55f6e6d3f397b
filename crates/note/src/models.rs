use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Book genre, as recorded in note frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Fiction,
    NonFiction,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "fiction",
            Genre::NonFiction => "non-fiction",
        }
    }
}

/// Canonical frontmatter for one book note.
///
/// One named field per recognized key, so the merge in
/// [`crate::reconcile`] handles every field by construction. Keys the
/// sync never produces — manual edits, fields from older versions of the
/// note format — land in `extra` and round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Completion date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_last_read: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub format: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned: Option<bool>,
    /// Star rating 1-5; absent when unrated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re_read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    /// Kept as a string to preserve forms like `0.1-4`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_number: Option<String>,
    /// `to-read`, `read`, or a passthrough shelf name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Last time this note was written by the sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Unrecognized keys, preserved verbatim across merges
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_serializes_kebab_case() {
        assert_eq!(
            serde_yaml::to_string(&Genre::NonFiction).unwrap().trim(),
            "non-fiction"
        );
        assert_eq!(Genre::NonFiction.as_str(), "non-fiction");
        assert_eq!(Genre::Fiction.as_str(), "fiction");
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let fm = Frontmatter {
            book_id: Some("42".to_string()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&fm).unwrap();
        assert!(yaml.contains("book_id"));
        assert!(!yaml.contains("rating"));
        assert!(!yaml.contains("subtitle"));
    }
}
