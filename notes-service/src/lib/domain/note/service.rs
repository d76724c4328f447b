use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::note::models::CreateNoteCommand;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteId;
use crate::domain::user::models::UserId;
use crate::note::errors::NoteError;
use crate::note::ports::NoteRepository;
use crate::note::ports::NoteServicePort;

/// Domain service implementation for note operations.
pub struct NoteService<NR>
where
    NR: NoteRepository,
{
    repository: Arc<NR>,
}

impl<NR> NoteService<NR>
where
    NR: NoteRepository,
{
    pub fn new(repository: Arc<NR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<NR> NoteServicePort for NoteService<NR>
where
    NR: NoteRepository,
{
    async fn create_note(
        &self,
        command: CreateNoteCommand,
        owner: UserId,
    ) -> Result<Note, NoteError> {
        let note = Note {
            id: NoteId::new(),
            owner_id: owner,
            title: command.title,
            content: command.content,
            created_at: Utc::now(),
        };

        let created_note = self.repository.create(note).await?;

        tracing::info!(note_id = %created_note.id, owner_id = %owner, "Note created");

        Ok(created_note)
    }

    async fn list_notes(&self, owner: UserId) -> Result<Vec<Note>, NoteError> {
        self.repository.find_by_owner(&owner).await
    }

    async fn delete_note(&self, note_id: NoteId, requester: UserId) -> Result<(), NoteError> {
        let note = self
            .repository
            .find_by_id(&note_id)
            .await?
            .ok_or_else(|| NoteError::NotFound(note_id.to_string()))?;

        if note.owner_id != requester {
            tracing::warn!(
                note_id = %note_id,
                owner_id = %note.owner_id,
                requester_id = %requester,
                "Delete rejected: requester does not own note"
            );
            return Err(NoteError::NotOwned(note_id.to_string()));
        }

        self.repository.delete(&note_id).await?;

        tracing::info!(note_id = %note_id, owner_id = %requester, "Note deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::note::models::NoteContent;
    use crate::note::models::NoteTitle;

    mock! {
        pub TestNoteRepository {}

        #[async_trait]
        impl NoteRepository for TestNoteRepository {
            async fn create(&self, note: Note) -> Result<Note, NoteError>;
            async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Note>, NoteError>;
            async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, NoteError>;
            async fn delete(&self, id: &NoteId) -> Result<(), NoteError>;
        }
    }

    fn note_for(owner: UserId) -> Note {
        Note {
            id: NoteId::new(),
            owner_id: owner,
            title: NoteTitle::new("t".to_string()).unwrap(),
            content: NoteContent::new("c".to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_note_stamps_owner() {
        let mut repository = MockTestNoteRepository::new();
        let owner = UserId::new();

        repository
            .expect_create()
            .withf(move |note| note.owner_id == owner && note.title.as_str() == "t")
            .times(1)
            .returning(|created| Ok(created));

        let service = NoteService::new(Arc::new(repository));

        let command = CreateNoteCommand::new(
            NoteTitle::new("t".to_string()).unwrap(),
            NoteContent::new("c".to_string()).unwrap(),
        );

        let note = service.create_note(command, owner).await.unwrap();
        assert_eq!(note.owner_id, owner);
    }

    #[tokio::test]
    async fn test_list_notes_scopes_by_owner() {
        let mut repository = MockTestNoteRepository::new();
        let owner = UserId::new();

        repository
            .expect_find_by_owner()
            .withf(move |o| *o == owner)
            .times(1)
            .returning(move |o| Ok(vec![note_for(*o), note_for(*o)]));

        let service = NoteService::new(Arc::new(repository));

        let notes = service.list_notes(owner).await.unwrap();
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().all(|n| n.owner_id == owner));
    }

    #[tokio::test]
    async fn test_delete_note_success() {
        let mut repository = MockTestNoteRepository::new();
        let owner = UserId::new();
        let note = note_for(owner);
        let note_id = note.id;

        repository
            .expect_find_by_id()
            .withf(move |id| *id == note_id)
            .times(1)
            .returning(move |_| Ok(Some(note.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == note_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = NoteService::new(Arc::new(repository));

        assert!(service.delete_note(note_id, owner).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_note_not_found() {
        let mut repository = MockTestNoteRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = NoteService::new(Arc::new(repository));

        let result = service.delete_note(NoteId::new(), UserId::new()).await;
        assert!(matches!(result, Err(NoteError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_note_rejects_non_owner() {
        let mut repository = MockTestNoteRepository::new();
        let owner = UserId::new();
        let stranger = UserId::new();
        let note = note_for(owner);
        let note_id = note.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(note.clone())));
        // The delete never reaches storage.
        repository.expect_delete().times(0);

        let service = NoteService::new(Arc::new(repository));

        let result = service.delete_note(note_id, stranger).await;
        assert!(matches!(result, Err(NoteError::NotOwned(_))));
    }
}
