/// Collapse a shelf identifier to its note status.
///
/// Shelves beginning with `to-read-` collapse to `to-read`, shelves
/// beginning with `read-` collapse to `read`, everything else passes
/// through unchanged. Prefix checks run in that order, first match wins.
pub fn normalize_shelf(raw: &str) -> String {
    if raw.starts_with("to-read-") {
        return "to-read".to_string();
    }
    if raw.starts_with("read-") {
        return "read".to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_read_prefix_collapses() {
        assert_eq!(normalize_shelf("to-read-mystery"), "to-read");
        assert_eq!(normalize_shelf("to-read-sci-fi"), "to-read");
    }

    #[test]
    fn test_read_prefix_collapses() {
        assert_eq!(normalize_shelf("read-2025"), "read");
        assert_eq!(normalize_shelf("read-non-fiction"), "read");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_shelf("currently-reading"), "currently-reading");
        assert_eq!(normalize_shelf("read"), "read");
        assert_eq!(normalize_shelf("to-read"), "to-read");
        assert_eq!(normalize_shelf("abandoned"), "abandoned");
    }
}
