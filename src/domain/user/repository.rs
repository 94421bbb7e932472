//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::User;
use crate::domain::DomainError;

#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a user. Usernames are unique; a duplicate is a conflict.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    async fn update(&self, user: &User) -> Result<User, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
