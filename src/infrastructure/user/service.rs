//! User service: signup, authentication, profile updates

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::user::{User, UserRepository, UserRole};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request to register a new account
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: Option<String>,
}

#[derive(Debug)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<User, DomainError> {
        if request.username.trim().is_empty() {
            return Err(DomainError::validation("Username must not be empty"));
        }
        if request.password.len() < 8 {
            return Err(DomainError::validation(
                "Password must be at least 8 characters",
            ));
        }

        let hash = self.hasher.hash(&request.password)?;
        let mut user = User::new(request.username, request.email, hash);
        if let Some(bio) = request.bio {
            user = user.with_bio(bio);
        }

        let created = self.repository.create(user).await?;
        info!(id = %created.id(), username = created.username(), "user registered");

        Ok(created)
    }

    /// Check a username/password pair. Returns the user on success,
    /// nothing when either the account is unknown or the password is
    /// wrong; callers cannot tell which.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let Some(user) = self.repository.get_by_username(username).await? else {
            return Ok(None);
        };

        if self.hasher.verify(password, user.password_hash()) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    pub async fn update_bio(&self, id: Uuid, bio: Option<String>) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))?;

        user.set_bio(bio);
        self.repository.update(&user).await
    }

    /// Promote an account to admin (used when seeding)
    pub async fn promote_to_admin(&self, id: Uuid) -> Result<User, DomainError> {
        let user = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))?;

        let promoted = user.with_role(UserRole::Admin);
        self.repository.update(&promoted).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::{Argon2Hasher, InMemoryUserRepository};

    fn create_service() -> UserService {
        UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2Hasher::new()),
        )
    }

    fn signup_request() -> SignupRequest {
        SignupRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
            bio: None,
        }
    }

    #[tokio::test]
    async fn test_signup_hashes_password() {
        let service = create_service();
        let user = service.signup(signup_request()).await.unwrap();

        assert_ne!(user.password_hash(), "correct horse");
        assert!(user.password_hash().starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let service = create_service();
        service.signup(signup_request()).await.unwrap();

        assert!(service
            .authenticate("alice", "correct horse")
            .await
            .unwrap()
            .is_some());
        assert!(service
            .authenticate("alice", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(service
            .authenticate("nobody", "correct horse")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let service = create_service();
        let mut request = signup_request();
        request.password = "short".to_string();

        let err = service.signup(request).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_bio() {
        let service = create_service();
        let user = service.signup(signup_request()).await.unwrap();

        let updated = service
            .update_bio(user.id(), Some("writes about rust".to_string()))
            .await
            .unwrap();
        assert_eq!(updated.bio(), Some("writes about rust"));
    }
}
