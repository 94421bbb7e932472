//! Like repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::Like;
use crate::domain::DomainError;

#[async_trait]
pub trait LikeRepository: Send + Sync + Debug {
    /// Insert a like. The (author, post) pair is unique; inserting a
    /// duplicate returns a conflict. The check and the insert happen under
    /// one critical section, so of N concurrent attempts exactly one wins.
    async fn create(&self, like: Like) -> Result<Like, DomainError>;

    /// Delete a like by id, scoped to its owner. Returns false both when
    /// the id does not exist and when it belongs to someone else; callers
    /// cannot tell the two apart.
    async fn delete_owned(&self, id: Uuid, author: Uuid) -> Result<bool, DomainError>;

    async fn list_by_post(&self, post: Uuid) -> Result<Vec<Like>, DomainError>;

    async fn list_by_author(&self, author: Uuid) -> Result<Vec<Like>, DomainError>;

    async fn list(&self) -> Result<Vec<Like>, DomainError>;
}
