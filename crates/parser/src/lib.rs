//! Feed title parsing.
//!
//! Splits a raw reading-shelf feed title into a clean title, subtitle, and
//! series fields, and normalizes shelf identifiers into note statuses. All
//! functions here are total: malformed input degrades to empty fields.

mod models;
mod shelf;
mod title;

pub use models::ParsedTitle;
pub use shelf::normalize_shelf;
pub use title::parse_title;
