use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::service::AuthenticatedSession;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Hashes the password and persists the user. The username availability
    /// check runs before the insert, but the database uniqueness constraint
    /// is the authoritative backstop for concurrent registrations.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    /// * `AccountNotFound` - No user with this username
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token issuance failed
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<AuthenticatedSession, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameTaken` - Uniqueness constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
