use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::note::models::NoteId;
use crate::domain::note::ports::NoteServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Deletes an explicitly identified note after an ownership check.
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(note_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let note_id =
        NoteId::from_string(&note_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .note_service
        .delete_note(note_id, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        // 204 carries no body, so the envelope is skipped here.
        .map(|_| StatusCode::NO_CONTENT)
}
