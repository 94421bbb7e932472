//! API key repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::ApiKey;
use crate::domain::DomainError;

/// Repository trait for API key storage
#[async_trait]
pub trait ApiKeyRepository: Send + Sync + Debug {
    /// Get an API key by its ID
    async fn get(&self, id: Uuid) -> Result<Option<ApiKey>, DomainError>;

    /// Get every key sharing a prefix. More than one record may carry the
    /// same prefix during rotation, so verification must try each.
    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<ApiKey>, DomainError>;

    /// Create a new API key record
    async fn create(&self, api_key: ApiKey) -> Result<ApiKey, DomainError>;

    /// Delete a key record. Deletion is the only form of revocation.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List all stored keys
    async fn list(&self) -> Result<Vec<ApiKey>, DomainError>;
}
