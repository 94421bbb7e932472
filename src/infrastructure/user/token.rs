//! Opaque bearer tokens
//!
//! Login issues a random token valid for 24 hours. Only a SHA-256
//! fingerprint is stored, so a token cannot be recovered from the store;
//! each login rotates the caller's token, and logout deletes it, which
//! revokes it immediately.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::DomainError;

const TOKEN_BYTES: usize = 32;
const TOKEN_TTL_HOURS: i64 = 24;

/// Stored token record (fingerprint at rest, never the token itself)
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub fingerprint: String,
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait TokenRepository: Send + Sync + Debug {
    async fn insert(&self, token: AuthToken) -> Result<(), DomainError>;

    async fn get(&self, fingerprint: &str) -> Result<Option<AuthToken>, DomainError>;

    async fn delete(&self, fingerprint: &str) -> Result<bool, DomainError>;

    async fn delete_for_user(&self, user: Uuid) -> Result<(), DomainError>;
}

/// Thread-safe in-memory token store
#[derive(Debug, Default)]
pub struct InMemoryTokenRepository {
    tokens: RwLock<HashMap<String, AuthToken>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn insert(&self, token: AuthToken) -> Result<(), DomainError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        tokens.insert(token.fingerprint.clone(), token);
        Ok(())
    }

    async fn get(&self, fingerprint: &str) -> Result<Option<AuthToken>, DomainError> {
        let tokens = self
            .tokens
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(tokens.get(fingerprint).cloned())
    }

    async fn delete(&self, fingerprint: &str) -> Result<bool, DomainError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(tokens.remove(fingerprint).is_some())
    }

    async fn delete_for_user(&self, user: Uuid) -> Result<(), DomainError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        tokens.retain(|_, t| t.user != user);
        Ok(())
    }
}

/// Issues, resolves and revokes bearer tokens
#[derive(Debug)]
pub struct TokenService {
    repository: Arc<dyn TokenRepository>,
    ttl: Duration,
}

impl TokenService {
    pub fn new(repository: Arc<dyn TokenRepository>) -> Self {
        Self {
            repository,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    #[cfg(test)]
    fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Issue a fresh token for a user, rotating any existing one
    pub async fn issue(&self, user: Uuid) -> Result<String, DomainError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = URL_SAFE_NO_PAD.encode(bytes);

        self.repository.delete_for_user(user).await?;
        self.repository
            .insert(AuthToken {
                fingerprint: fingerprint(&token),
                user,
                created_at: Utc::now(),
            })
            .await?;

        Ok(token)
    }

    /// Resolve a presented token to a user id. Expired tokens are removed
    /// on sight and resolve to nothing.
    pub async fn resolve(&self, token: &str) -> Result<Option<Uuid>, DomainError> {
        let fp = fingerprint(token);

        let Some(stored) = self.repository.get(&fp).await? else {
            return Ok(None);
        };

        if stored.created_at + self.ttl <= Utc::now() {
            self.repository.delete(&fp).await?;
            return Ok(None);
        }

        Ok(Some(stored.user))
    }

    /// Delete the presented token (logout)
    pub async fn revoke(&self, token: &str) -> Result<bool, DomainError> {
        self.repository.delete(&fingerprint(token)).await
    }

    /// Delete every token belonging to a user
    pub async fn revoke_all(&self, user: Uuid) -> Result<(), DomainError> {
        self.repository.delete_for_user(user).await
    }
}

fn fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_service() -> TokenService {
        TokenService::new(Arc::new(InMemoryTokenRepository::new()))
    }

    #[tokio::test]
    async fn test_issue_and_resolve() {
        let service = create_service();
        let user = Uuid::new_v4();

        let token = service.issue(user).await.unwrap();
        assert_eq!(service.resolve(&token).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() {
        let service = create_service();
        assert_eq!(service.resolve("bogus").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_issue_rotates_previous_token() {
        let service = create_service();
        let user = Uuid::new_v4();

        let first = service.issue(user).await.unwrap();
        let second = service.issue(user).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(service.resolve(&first).await.unwrap(), None);
        assert_eq!(service.resolve(&second).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_expired_token_is_removed() {
        let service =
            TokenService::new(Arc::new(InMemoryTokenRepository::new())).with_ttl(Duration::zero());
        let user = Uuid::new_v4();

        let token = service.issue(user).await.unwrap();
        assert_eq!(service.resolve(&token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_revoke() {
        let service = create_service();
        let user = Uuid::new_v4();

        let token = service.issue(user).await.unwrap();
        assert!(service.revoke(&token).await.unwrap());
        assert_eq!(service.resolve(&token).await.unwrap(), None);
    }
}
