use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::note::models::Note;
use crate::domain::note::models::NoteContent;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::NoteTitle;
use crate::domain::note::ports::NoteRepository;
use crate::domain::user::models::UserId;
use crate::note::errors::NoteError;

pub struct PostgresNoteRepository {
    pool: PgPool,
}

impl PostgresNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_note(row: PgRow) -> Result<Note, NoteError> {
        Ok(Note {
            id: NoteId(
                row.try_get("id")
                    .map_err(|e| NoteError::DatabaseError(e.to_string()))?,
            ),
            owner_id: UserId(
                row.try_get("owner_id")
                    .map_err(|e| NoteError::DatabaseError(e.to_string()))?,
            ),
            title: NoteTitle::new(
                row.try_get("title")
                    .map_err(|e| NoteError::DatabaseError(e.to_string()))?,
            )?,
            content: NoteContent::new(
                row.try_get("content")
                    .map_err(|e| NoteError::DatabaseError(e.to_string()))?,
            )?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| NoteError::DatabaseError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn create(&self, note: Note) -> Result<Note, NoteError> {
        sqlx::query(
            r#"
            INSERT INTO notes (id, owner_id, title, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(note.id.0)
        .bind(note.owner_id.0)
        .bind(note.title.as_str())
        .bind(note.content.as_str())
        .bind(note.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return NoteError::OwnerNotFound(note.owner_id.to_string());
                }
            }
            NoteError::DatabaseError(e.to_string())
        })?;

        Ok(note)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Note>, NoteError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, title, content, created_at
            FROM notes
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_note).collect()
    }

    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, NoteError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, title, content, created_at
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_note).transpose()
    }

    async fn delete(&self, id: &NoteId) -> Result<(), NoteError> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(NoteError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
