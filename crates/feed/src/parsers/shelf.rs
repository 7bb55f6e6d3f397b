use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::models::FeedEntry;
use crate::FeedError;

/// Parse a reading-shelf RSS feed from raw XML bytes
pub fn parse_shelf_feed(xml: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut current_entry: Option<FeedEntryBuilder> = None;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                current_element = name.clone();

                if name == "item" {
                    current_entry = Some(FeedEntryBuilder::default());
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == "item" {
                    if let Some(builder) = current_entry.take() {
                        if let Some(entry) = builder.build() {
                            entries.push(entry);
                        }
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut entry) = current_entry {
                    let text = e.unescape().unwrap_or_default().to_string();
                    if !text.is_empty() {
                        entry.set_field(&current_element, text);
                    }
                }
            }
            Ok(Event::CData(e)) => {
                // Titles and descriptions usually arrive wrapped in CDATA
                if let Some(ref mut entry) = current_entry {
                    let text = String::from_utf8_lossy(e.as_ref()).to_string();
                    if !text.is_empty() {
                        entry.set_field(&current_element, text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Parse(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

#[derive(Default)]
struct FeedEntryBuilder {
    title: Option<String>,
    author_name: Option<String>,
    book_id: Option<String>,
    book_description: Option<String>,
    cover_url: Option<String>,
    user_shelves: Option<String>,
    user_rating: Option<String>,
    user_read_at: Option<String>,
}

impl FeedEntryBuilder {
    fn set_field(&mut self, element: &str, text: String) {
        match element {
            "title" => self.title = Some(text),
            "author_name" => self.author_name = Some(text),
            "book_id" => self.book_id = Some(text),
            "book_description" => self.book_description = Some(text),
            "book_large_image_url" => self.cover_url = Some(text),
            "user_shelves" => self.user_shelves = Some(text),
            "user_rating" => self.user_rating = Some(text),
            "user_read_at" => self.user_read_at = Some(text),
            _ => {}
        }
    }

    /// Entries without a title or book id are unusable and dropped
    fn build(self) -> Option<FeedEntry> {
        Some(FeedEntry {
            title: self.title?,
            book_id: self.book_id?,
            author_name: self.author_name.unwrap_or_default(),
            book_description: self.book_description.unwrap_or_default(),
            cover_url: self.cover_url.unwrap_or_default(),
            user_shelves: self.user_shelves.unwrap_or_default(),
            user_rating: self.user_rating.unwrap_or_default(),
            user_read_at: self.user_read_at.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>My bookshelf: read</title>
    <item>
      <title><![CDATA[Foundation (Foundation, #1)]]></title>
      <book_id>29579</book_id>
      <author_name>Isaac Asimov</author_name>
      <book_description><![CDATA[<i>Foundation</i> marks the first of a series.]]></book_description>
      <book_large_image_url><![CDATA[https://images.example.com/29579.jpg]]></book_large_image_url>
      <user_shelves>read, owned</user_shelves>
      <user_rating>5</user_rating>
      <user_read_at>Fri, 07 Nov 2025 00:00:00 -0800</user_read_at>
    </item>
    <item>
      <title>No Id Here</title>
      <author_name>Nobody</author_name>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_shelf_feed() {
        let entries = parse_shelf_feed(SAMPLE_FEED.as_bytes()).unwrap();
        // The entry without a book_id is dropped
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.title, "Foundation (Foundation, #1)");
        assert_eq!(entry.book_id, "29579");
        assert_eq!(entry.author_name, "Isaac Asimov");
        assert_eq!(
            entry.book_description,
            "<i>Foundation</i> marks the first of a series."
        );
        assert_eq!(entry.cover_url, "https://images.example.com/29579.jpg");
        assert_eq!(entry.user_shelves, "read, owned");
        assert_eq!(entry.user_rating, "5");
        assert_eq!(entry.user_read_at, "Fri, 07 Nov 2025 00:00:00 -0800");
    }

    #[test]
    fn test_parse_mismatched_tags() {
        let xml = b"<rss><item><title>Broken</wrong></item></rss>";
        assert!(parse_shelf_feed(xml).is_err());
    }

    #[test]
    fn test_parse_empty_feed() {
        let xml = br#"<rss><channel><title>empty</title></channel></rss>"#;
        assert!(parse_shelf_feed(xml).unwrap().is_empty());
    }
}
