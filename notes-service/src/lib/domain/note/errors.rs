use thiserror::Error;

/// Error for NoteId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for note title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteTitleError {
    #[error("Note title must not be empty")]
    Empty,

    #[error("Note title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for note content validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteContentError {
    #[error("Note content too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all note-related operations
#[derive(Debug, Clone, Error)]
pub enum NoteError {
    #[error("Invalid note ID: {0}")]
    InvalidNoteId(#[from] NoteIdError),

    #[error("Invalid note title: {0}")]
    InvalidTitle(#[from] NoteTitleError),

    #[error("Invalid note content: {0}")]
    InvalidContent(#[from] NoteContentError),

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Note {0} does not belong to the requesting user")]
    NotOwned(String),

    #[error("Note owner does not exist: {0}")]
    OwnerNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
