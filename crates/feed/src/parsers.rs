mod shelf;

pub use shelf::parse_shelf_feed;
