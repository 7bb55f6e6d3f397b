use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Note(#[from] note::NoteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
