use serde_yaml::{Mapping, Value};

use crate::models::Frontmatter;
use crate::{NoteError, Result};

/// Frontmatter fence: a line containing exactly this marker.
pub(crate) const FENCE: &str = "---";

/// Canonical keys whose values are strings. Old files may carry them as
/// bare YAML scalars (`book_id: 51777543`, `series_number: 1.5`); those
/// fold back to strings during normalization.
const STRING_KEYS: &[&str] = &[
    "book_id",
    "book_description",
    "cover",
    "date_last_read",
    "series_name",
    "series_number",
    "status",
    "subtitle",
    "updated",
];

/// Split a Markdown document into its YAML frontmatter and body.
///
/// The frontmatter must start on the first line, fenced above and below by
/// lines containing exactly `---`. Returns `None` when no complete fence is
/// present.
pub fn split_document(content: &str) -> Option<(String, String)> {
    let mut lines = content.lines();
    if lines.next().map(str::trim_end) != Some(FENCE) {
        return None;
    }

    let mut yaml = String::new();
    for line in lines.by_ref() {
        if line.trim_end() == FENCE {
            let mut body = lines.collect::<Vec<_>>().join("\n");
            // One blank line after the closing fence is formatting, not body
            if let Some(stripped) = body.strip_prefix('\n') {
                body = stripped.to_string();
            }
            return Some((yaml, body));
        }
        yaml.push_str(line);
        yaml.push('\n');
    }

    None
}

/// Parse a frontmatter block into the canonical model.
///
/// The raw mapping is normalized first so representation drift in old files
/// never shows up as a metadata difference.
pub fn parse_frontmatter(yaml: &str) -> Result<Frontmatter> {
    let value: Value = serde_yaml::from_str(yaml)?;
    if !matches!(value, Value::Mapping(_)) {
        return Err(NoteError::NotAMapping);
    }

    Ok(serde_yaml::from_value(normalize_mapping(value))?)
}

/// Fold representation drift out of a raw frontmatter mapping:
/// hyphenated keys become underscored, string booleans become booleans,
/// empty-string and null values are dropped, and bare scalars under
/// string-typed canonical keys become strings.
pub fn normalize_mapping(value: Value) -> Value {
    let Value::Mapping(map) = value else {
        return value;
    };

    let mut out = Mapping::new();
    for (key, val) in map {
        let key = match key {
            Value::String(s) => s.replace('-', "_"),
            other => {
                out.insert(other, val);
                continue;
            }
        };

        let val = normalize_scalar(val, &key);
        if val.is_null() {
            continue;
        }
        out.insert(Value::String(key), val);
    }

    Value::Mapping(out)
}

fn normalize_scalar(value: Value, key: &str) -> Value {
    match value {
        Value::String(s) => match s.as_str() {
            "" => Value::Null,
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(s),
        },
        Value::Number(n) if STRING_KEYS.contains(&key) => Value::String(n.to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_document() {
        let content = "---\nbook_id: '42'\n---\n\nA description.\n";
        let (yaml, body) = split_document(content).unwrap();
        assert_eq!(yaml, "book_id: '42'\n");
        assert_eq!(body, "A description.");
    }

    #[test]
    fn test_split_document_no_fence() {
        assert!(split_document("just some text").is_none());
        assert!(split_document("---\nnever: closed\n").is_none());
        assert!(split_document("").is_none());
    }

    #[test]
    fn test_parse_normalizes_hyphenated_keys() {
        let fm = parse_frontmatter("date-last-read: 2025-11-07\nseries-name: Foundation\n")
            .unwrap();
        assert_eq!(fm.date_last_read.as_deref(), Some("2025-11-07"));
        assert_eq!(fm.series_name.as_deref(), Some("Foundation"));
    }

    #[test]
    fn test_parse_coerces_string_booleans() {
        let fm = parse_frontmatter("owned: 'true'\nre_read: 'false'\n").unwrap();
        assert_eq!(fm.owned, Some(true));
        assert_eq!(fm.re_read, Some(false));
    }

    #[test]
    fn test_parse_treats_empty_strings_as_absent() {
        let fm = parse_frontmatter("rating: ''\nsubtitle: ''\nbook_id: '42'\n").unwrap();
        assert_eq!(fm.rating, None);
        assert_eq!(fm.subtitle, None);
        assert_eq!(fm.book_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_parse_folds_bare_scalars_to_strings() {
        let fm = parse_frontmatter("book_id: 51777543\nseries_number: 1.5\nrating: 4\n")
            .unwrap();
        assert_eq!(fm.book_id.as_deref(), Some("51777543"));
        assert_eq!(fm.series_number.as_deref(), Some("1.5"));
        assert_eq!(fm.rating, Some(4));
    }

    #[test]
    fn test_parse_keeps_unknown_keys() {
        let fm = parse_frontmatter("book_id: '42'\nmy_note: keep me\n").unwrap();
        assert_eq!(
            fm.extra.get("my_note"),
            Some(&serde_yaml::Value::String("keep me".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        assert!(matches!(
            parse_frontmatter("just a scalar"),
            Err(NoteError::NotAMapping)
        ));
    }
}
