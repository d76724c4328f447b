use async_trait::async_trait;

use crate::domain::note::models::CreateNoteCommand;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteId;
use crate::domain::user::models::UserId;
use crate::note::errors::NoteError;

/// Port for note domain service operations.
///
/// Every operation takes the owner resolved from the verified session token;
/// this is the owner-scoping boundary.
#[async_trait]
pub trait NoteServicePort: Send + Sync + 'static {
    /// Create a note owned by the authenticated user.
    ///
    /// # Errors
    /// * `OwnerNotFound` - Owner no longer exists in storage
    /// * `DatabaseError` - Database operation failed
    async fn create_note(&self, command: CreateNoteCommand, owner: UserId)
        -> Result<Note, NoteError>;

    /// List the authenticated user's notes, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_notes(&self, owner: UserId) -> Result<Vec<Note>, NoteError>;

    /// Delete a note by id, verifying the requester owns it.
    ///
    /// # Errors
    /// * `NotFound` - Note does not exist
    /// * `NotOwned` - Note belongs to a different user
    /// * `DatabaseError` - Database operation failed
    async fn delete_note(&self, note_id: NoteId, requester: UserId) -> Result<(), NoteError>;
}

/// Persistence operations for the note aggregate.
#[async_trait]
pub trait NoteRepository: Send + Sync + 'static {
    /// Persist new note to storage.
    ///
    /// # Errors
    /// * `OwnerNotFound` - Owner foreign key violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, note: Note) -> Result<Note, NoteError>;

    /// Retrieve all notes for an owner, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Note>, NoteError>;

    /// Retrieve note by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, NoteError>;

    /// Remove note from storage.
    ///
    /// # Errors
    /// * `NotFound` - Note does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &NoteId) -> Result<(), NoteError>;
}
