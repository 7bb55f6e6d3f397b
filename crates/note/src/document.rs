use crate::frontmatter::{parse_frontmatter, split_document, FENCE};
use crate::models::Frontmatter;
use crate::{NoteError, Result};

/// One Markdown note on disk: fenced YAML frontmatter plus free-form body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl Document {
    pub fn new(frontmatter: Frontmatter, body: impl Into<String>) -> Self {
        Self {
            frontmatter,
            body: body.into(),
        }
    }

    /// Parse a note file's contents.
    ///
    /// Fails with [`NoteError::MissingFrontmatter`] when the file has no
    /// complete frontmatter fence; callers treat that file as skipped.
    pub fn parse(content: &str) -> Result<Self> {
        let (yaml, body) = split_document(content).ok_or(NoteError::MissingFrontmatter)?;
        Ok(Self {
            frontmatter: parse_frontmatter(&yaml)?,
            body,
        })
    }

    /// Render the note back to Markdown text.
    pub fn render(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.frontmatter)?;

        let mut out = String::with_capacity(yaml.len() + self.body.len() + 16);
        out.push_str(FENCE);
        out.push('\n');
        out.push_str(&yaml);
        out.push_str(FENCE);
        out.push('\n');
        if !self.body.is_empty() {
            out.push('\n');
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_parse_round_trip() {
        let fm = Frontmatter {
            author: vec!["Ursula K Le Guin".to_string()],
            book_id: Some("13651".to_string()),
            rating: Some(5),
            owned: Some(true),
            status: Some("read".to_string()),
            ..Default::default()
        };
        let doc = Document::new(fm, "An ambiguous utopia.");

        let rendered = doc.render().unwrap();
        let reparsed = Document::parse(&rendered).unwrap();

        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_parse_without_fence_fails() {
        assert!(matches!(
            Document::parse("no fence here"),
            Err(NoteError::MissingFrontmatter)
        ));
    }

    #[test]
    fn test_rendered_shape() {
        let fm = Frontmatter {
            book_id: Some("42".to_string()),
            ..Default::default()
        };
        let rendered = Document::new(fm, "Body text.").render().unwrap();
        assert!(rendered.starts_with("---\n"));
        assert!(rendered.contains("\n---\n\nBody text.\n"));
    }
}
