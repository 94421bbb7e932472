//! In-memory API key repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::api_key::{ApiKey, ApiKeyRepository};
use crate::domain::DomainError;

/// Thread-safe in-memory key store. Data is lost when the process exits;
/// keys are re-provisioned through the CLI.
#[derive(Debug, Default)]
pub struct InMemoryApiKeyRepository {
    keys: RwLock<HashMap<Uuid, ApiKey>>,
}

impl InMemoryApiKeyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryApiKeyRepository {
    async fn get(&self, id: Uuid) -> Result<Option<ApiKey>, DomainError> {
        let keys = self
            .keys
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(keys.get(&id).cloned())
    }

    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<ApiKey>, DomainError> {
        let keys = self
            .keys
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(keys
            .values()
            .filter(|k| k.prefix() == prefix)
            .cloned()
            .collect())
    }

    async fn create(&self, api_key: ApiKey) -> Result<ApiKey, DomainError> {
        let mut keys = self
            .keys
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        keys.insert(api_key.id(), api_key.clone());
        Ok(api_key)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut keys = self
            .keys
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(keys.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
        let keys = self
            .keys
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(keys.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryApiKeyRepository::new();
        let key = ApiKey::new("ci", "eNR3fmpc", "$argon2id$fake");

        repo.create(key.clone()).await.unwrap();

        let found = repo.get(key.id()).await.unwrap();
        assert_eq!(found.unwrap().prefix(), "eNR3fmpc");
    }

    #[tokio::test]
    async fn test_list_by_prefix_returns_all_candidates() {
        let repo = InMemoryApiKeyRepository::new();

        repo.create(ApiKey::new("old", "eNR3fmpc", "hash-a"))
            .await
            .unwrap();
        repo.create(ApiKey::new("new", "eNR3fmpc", "hash-b"))
            .await
            .unwrap();
        repo.create(ApiKey::new("other", "zzzzzzzz", "hash-c"))
            .await
            .unwrap();

        let candidates = repo.list_by_prefix("eNR3fmpc").await.unwrap();
        assert_eq!(candidates.len(), 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryApiKeyRepository::new();
        let key = ApiKey::new("ci", "eNR3fmpc", "hash");

        repo.create(key.clone()).await.unwrap();
        assert!(repo.delete(key.id()).await.unwrap());
        assert!(!repo.delete(key.id()).await.unwrap());
        assert!(repo.get(key.id()).await.unwrap().is_none());
    }
}
