use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UsernameError;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    confirm_password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("All fields are required")]
    MissingFields,

    #[error("{0}")]
    Password(#[from] PasswordPolicyError),

    #[error("Passwords must match")]
    PasswordMismatch,

    #[error("{0}")]
    Username(#[from] UsernameError),
}

impl RegisterRequest {
    /// Validation sequence is ordered and short-circuits: missing fields,
    /// then password length, then confirmation match, then username shape.
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        if self.username.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ParseRegisterRequestError::MissingFields);
        }

        let password = Password::new(self.password)?;

        if password.as_str() != self.confirm_password {
            return Err(ParseRegisterRequestError::PasswordMismatch);
        }

        let username = Username::new(self.username)?;

        Ok(RegisterUserCommand::new(username, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Public fields only; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_missing_fields_win_over_everything() {
        let result = request("", "abc", "xyz").try_into_command();
        assert!(matches!(
            result,
            Err(ParseRegisterRequestError::MissingFields)
        ));
    }

    #[test]
    fn test_short_password_checked_before_mismatch() {
        let result = request("alice", "abc", "abcd").try_into_command();
        assert!(matches!(result, Err(ParseRegisterRequestError::Password(_))));
    }

    #[test]
    fn test_password_mismatch() {
        let result = request("alice", "secret1", "secret2").try_into_command();
        assert!(matches!(
            result,
            Err(ParseRegisterRequestError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_invalid_username_checked_last() {
        let result = request("alice bob", "secret1", "secret1").try_into_command();
        assert!(matches!(result, Err(ParseRegisterRequestError::Username(_))));
    }

    #[test]
    fn test_valid_request() {
        let command = request("alice", "secret1", "secret1")
            .try_into_command()
            .unwrap();
        assert_eq!(command.username.as_str(), "alice");
        assert_eq!(command.password.as_str(), "secret1");
    }
}
