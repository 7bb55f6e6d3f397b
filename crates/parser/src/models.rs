use serde::{Deserialize, Serialize};

/// Result of parsing one raw feed title.
///
/// `title` carries no leading/trailing whitespace and no punctuation other
/// than hyphens. `series_number` is empty or one of `N`, `N-M`, `N.M`,
/// `N.M-K`, kept as a string to preserve exact formatting such as `0.1-4`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTitle {
    /// Cleaned title, safe for filenames and YAML
    pub title: String,
    /// Text after the first colon, empty when the title has none
    pub subtitle: String,
    /// Series name from the parenthetical marker, empty when absent
    pub series_name: String,
    /// Series position from the parenthetical marker, empty when absent
    pub series_number: String,
}
