use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::NoteData;
use crate::domain::note::models::CreateNoteCommand;
use crate::domain::note::models::NoteContent;
use crate::domain::note::models::NoteTitle;
use crate::domain::note::ports::NoteServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::note::errors::NoteContentError;
use crate::note::errors::NoteTitleError;

/// Owner comes from the verified token, never from the body.
pub async fn create_note(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateNoteRequest>,
) -> Result<ApiSuccess<NoteData>, ApiError> {
    state
        .note_service
        .create_note(body.try_into_command()?, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::CREATED, note.into()))
}

/// HTTP request body for creating a note (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateNoteRequestError {
    #[error("{0}")]
    Title(#[from] NoteTitleError),

    #[error("{0}")]
    Content(#[from] NoteContentError),
}

impl CreateNoteRequest {
    fn try_into_command(self) -> Result<CreateNoteCommand, ParseCreateNoteRequestError> {
        let title = NoteTitle::new(self.title)?;
        let content = NoteContent::new(self.content)?;
        Ok(CreateNoteCommand::new(title, content))
    }
}

impl From<ParseCreateNoteRequestError> for ApiError {
    fn from(err: ParseCreateNoteRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
