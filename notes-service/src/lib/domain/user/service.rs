use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Result of a successful login: the user plus a signed session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: String,
}

/// Domain service implementation for user operations.
///
/// Owns credential handling: plaintext passwords enter here, get hashed or
/// verified, and never reach the repository or the logs.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
    token_service: Arc<auth::TokenService>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, token_service: Arc<auth::TokenService>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
            token_service,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Availability check first for a friendly error; concurrent
        // registrations slipping past it are caught by the uniqueness
        // constraint inside `create`.
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameTaken(command.username.to_string()));
        }

        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, username = %created_user.username, "User registered");

        Ok(created_user)
    }

    async fn authenticate(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<AuthenticatedSession, UserError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::AccountNotFound(username.to_string()))?;

        let matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        if !matches {
            tracing::warn!(username = %username, "Login rejected: wrong password");
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .token_service
            .issue(user.id, user.username.as_str())
            .map_err(|e| UserError::Token(e.to_string()))?;

        tracing::info!(user_id = %user.id, username = %username, "Login succeeded");

        Ok(AuthenticatedSession { user, token })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    fn token_service() -> Arc<auth::TokenService> {
        Arc::new(auth::TokenService::new(
            b"test-secret-key-for-jwt-signing-at-least-32-bytes",
            24,
        ))
    }

    fn stored_user(username: &str, password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice" && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|created| Ok(created));

        let service = UserService::new(Arc::new(repository), token_service());

        let command = RegisterUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            crate::user::models::Password::new("secret1".to_string()).unwrap(),
        );

        let user = service.register(command).await.unwrap();
        assert_eq!(user.username.as_str(), "alice");
        // The stored hash is a real Argon2 digest, never the plaintext.
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_username_taken() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice", "secret1"))));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository), token_service());

        let command = RegisterUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            crate::user::models::Password::new("secret1".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(UserError::UsernameTaken(_))));
    }

    #[tokio::test]
    async fn test_register_race_caught_by_constraint() {
        // The pre-insert lookup misses, but the insert itself hits the
        // uniqueness constraint (two concurrent registrations).
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(UserError::UsernameTaken(user.username.to_string())));

        let service = UserService::new(Arc::new(repository), token_service());

        let command = RegisterUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            crate::user::models::Password::new("secret1".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(UserError::UsernameTaken(_))));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("alice", "secret1");
        let user_id = user.id;
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let tokens = token_service();
        let service = UserService::new(Arc::new(repository), Arc::clone(&tokens));

        let username = Username::new("alice".to_string()).unwrap();
        let session = service.authenticate(&username, "secret1").await.unwrap();

        assert_eq!(session.user.id, user_id);

        // The issued token resolves back to the same user.
        let claims = tokens.verify(&session.token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice", "secret1"))));

        let service = UserService::new(Arc::new(repository), token_service());

        let username = Username::new("alice".to_string()).unwrap();
        let result = service.authenticate(&username, "wrong").await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_account_is_distinct() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), token_service());

        let username = Username::new("nobody".to_string()).unwrap();
        let result = service.authenticate(&username, "secret1").await;

        // Unknown account and wrong password are different failures.
        assert!(matches!(result, Err(UserError::AccountNotFound(_))));
    }
}
