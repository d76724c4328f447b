use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::NoteData;
use crate::domain::note::ports::NoteServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Lists only the authenticated user's notes; the owner scope is the token
/// subject, not anything the caller supplied.
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<NoteData>>, ApiError> {
    state
        .note_service
        .list_notes(auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|notes| {
            let note_data: Vec<NoteData> = notes.iter().map(|n| n.into()).collect();
            ApiSuccess::new(StatusCode::OK, note_data)
        })
}
