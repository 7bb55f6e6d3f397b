use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("note has no frontmatter fence")]
    MissingFrontmatter,

    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,

    #[error("invalid frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
