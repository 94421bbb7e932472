//! Tag entity and repository trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

use crate::domain::DomainError;

/// Free-form label attached to posts. Names are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    id: Uuid,
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[async_trait]
pub trait TagRepository: Send + Sync + Debug {
    async fn get(&self, id: Uuid) -> Result<Option<Tag>, DomainError>;

    /// Create a tag. A duplicate name is a conflict.
    async fn create(&self, tag: Tag) -> Result<Tag, DomainError>;

    async fn update(&self, tag: &Tag) -> Result<Tag, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn list(&self) -> Result<Vec<Tag>, DomainError>;
}
