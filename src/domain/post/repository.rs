//! Post repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::Post;
use crate::domain::DomainError;

#[async_trait]
pub trait PostRepository: Send + Sync + Debug {
    async fn get(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    async fn create(&self, post: Post) -> Result<Post, DomainError>;

    async fn update(&self, post: &Post) -> Result<Post, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List posts belonging to one author, newest first
    async fn list_by_author(&self, author: Uuid) -> Result<Vec<Post>, DomainError>;

    /// List every post, newest first, optionally filtered by a substring
    /// match over title and content
    async fn list(&self, search: Option<&str>) -> Result<Vec<Post>, DomainError>;
}
