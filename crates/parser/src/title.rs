use regex::Regex;
use std::sync::LazyLock;

use crate::models::ParsedTitle;

// Series marker cascade. Each pattern must match the full title; they are
// tried in order and the first hit wins.

// Single entry: "Name (Series, #3)"
static SERIES_SINGLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(?P<paren>\((?P<series>.+), #(?P<number>\d+)\))\s*$").unwrap()
});

// Ranged or omnibus entry: "Name (Series, #1-3)" / "Name (Series, #1.5)"
static SERIES_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(?P<paren>\((?P<series>.+), #(?P<number>\d+[-.]\d+)\))\s*$").unwrap()
});

// Range that pulls in novellas: "Name (Series, #0.1-4)"
static SERIES_NOVELLA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(?P<paren>\((?P<series>.+), #(?P<number>\d+\.\d+-\d+)\))\s*$").unwrap()
});

/// Parse a raw feed title into clean title, subtitle, and series fields.
///
/// Total function: titles without a series marker or subtitle come back with
/// those fields empty, never an error.
///
/// # Examples
///
/// ```
/// use parser::parse_title;
///
/// let parsed = parse_title("Foundation (Foundation, #1)");
/// assert_eq!(parsed.title, "Foundation");
/// assert_eq!(parsed.series_name, "Foundation");
/// assert_eq!(parsed.series_number, "1");
/// ```
pub fn parse_title(raw: &str) -> ParsedTitle {
    let (stripped, series_name, series_number) = extract_series(raw);
    let (stripped, subtitle) = extract_subtitle(&stripped);
    let title = strip_punctuation(&stripped);

    ParsedTitle {
        title,
        subtitle,
        series_name,
        series_number,
    }
}

/// Match the trailing parenthetical series marker, if any, and remove it.
fn extract_series(raw: &str) -> (String, String, String) {
    // Cheap pre-check before running the cascade
    if !(raw.contains('(') && raw.contains('#')) {
        return (raw.to_string(), String::new(), String::new());
    }

    let patterns = [
        &*SERIES_SINGLE_PATTERN,
        &*SERIES_RANGE_PATTERN,
        &*SERIES_NOVELLA_PATTERN,
    ];

    for pattern in patterns {
        if let Some(caps) = pattern.captures(raw) {
            let paren = caps.name("paren").map_or("", |m| m.as_str());
            let series = caps.name("series").map_or("", |m| m.as_str());
            let number = caps.name("number").map_or("", |m| m.as_str());

            let stripped = raw.replacen(paren, "", 1);
            return (
                stripped,
                strip_punctuation(series),
                number.trim().to_string(),
            );
        }
    }

    (raw.to_string(), String::new(), String::new())
}

/// Split off everything after the first colon as the subtitle.
fn extract_subtitle(title: &str) -> (String, String) {
    match title.split_once(':') {
        Some((head, rest)) => (head.to_string(), rest.trim().to_string()),
        None => (title.to_string(), String::new()),
    }
}

/// Strip punctuation down to a filesystem- and YAML-safe string.
///
/// `&` becomes the word "and"; every ASCII punctuation character except
/// hyphen is deleted, along with curly apostrophes (both the real codepoint
/// and the cp1252 mojibake `â€™` left by older exports). Whitespace runs
/// collapse to single spaces.
fn strip_punctuation(text: &str) -> String {
    let text = text
        .replace('&', "and")
        .replace("â€™", "")
        .replace('\u{2019}', "");

    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation() || *c == '-')
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
