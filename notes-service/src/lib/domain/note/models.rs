use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;
use crate::note::errors::NoteContentError;
use crate::note::errors::NoteIdError;
use crate::note::errors::NoteTitleError;

/// Note entity.
///
/// Belongs to exactly one user; `owner_id` always comes from the verified
/// session, never from a request field.
#[derive(Debug, Clone)]
pub struct Note {
    pub id: NoteId,
    pub owner_id: UserId,
    pub title: NoteTitle,
    pub content: NoteContent,
    pub created_at: DateTime<Utc>,
}

/// Note unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Generate a new random note ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a note ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, NoteIdError> {
        Uuid::parse_str(s)
            .map(NoteId)
            .map_err(|e| NoteIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Note title value type: non-empty, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTitle(String);

impl NoteTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated note title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, NoteTitleError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(NoteTitleError::Empty);
        }

        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(NoteTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Note content value type: may be empty, at most 10000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContent(String);

impl NoteContent {
    const MAX_LENGTH: usize = 10_000;

    /// Create a new validated note content.
    ///
    /// # Errors
    /// * `TooLong` - Content exceeds 10000 characters
    pub fn new(content: String) -> Result<Self, NoteContentError> {
        let length = content.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(NoteContentError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a new note with domain types
#[derive(Debug)]
pub struct CreateNoteCommand {
    pub title: NoteTitle,
    pub content: NoteContent,
}

impl CreateNoteCommand {
    pub fn new(title: NoteTitle, content: NoteContent) -> Self {
        Self { title, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_valid() {
        let title = NoteTitle::new("  groceries ".to_string()).unwrap();
        assert_eq!(title.as_str(), "groceries");
    }

    #[test]
    fn test_title_empty() {
        assert!(matches!(
            NoteTitle::new("  ".to_string()),
            Err(NoteTitleError::Empty)
        ));
    }

    #[test]
    fn test_title_too_long() {
        let result = NoteTitle::new("x".repeat(201));
        assert!(matches!(result, Err(NoteTitleError::TooLong { .. })));
    }

    #[test]
    fn test_content_may_be_empty() {
        assert!(NoteContent::new(String::new()).is_ok());
    }

    #[test]
    fn test_content_too_long() {
        let result = NoteContent::new("x".repeat(10_001));
        assert!(matches!(result, Err(NoteContentError::TooLong { .. })));
    }
}
