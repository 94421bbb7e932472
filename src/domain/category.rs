//! Category entity and repository trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

use crate::domain::DomainError;

/// Editorial grouping for posts. Names are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: Uuid,
    name: String,
}

impl Category {
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
pub trait CategoryRepository: Send + Sync + Debug {
    async fn get(&self, id: Uuid) -> Result<Option<Category>, DomainError>;

    /// Create a category. A duplicate name is a conflict.
    async fn create(&self, category: Category) -> Result<Category, DomainError>;

    async fn update(&self, category: &Category) -> Result<Category, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn list(&self) -> Result<Vec<Category>, DomainError>;
}
