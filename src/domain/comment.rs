//! Comment entity and repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

use crate::domain::DomainError;

/// Comment left on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    id: Uuid,
    content: String,
    author: Uuid,
    post: Uuid,
    created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: Uuid, post: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            author,
            post,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Uuid {
        self.author
    }

    pub fn post(&self) -> Uuid {
        self.post
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

#[async_trait]
pub trait CommentRepository: Send + Sync + Debug {
    async fn get(&self, id: Uuid) -> Result<Option<Comment>, DomainError>;

    async fn create(&self, comment: Comment) -> Result<Comment, DomainError>;

    async fn update(&self, comment: &Comment) -> Result<Comment, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn list_by_post(&self, post: Uuid) -> Result<Vec<Comment>, DomainError>;
}
