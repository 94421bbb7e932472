//! Post entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    #[default]
    Published,
}

/// Blog post authored by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    id: Uuid,
    title: String,
    content: String,
    author: Uuid,
    tags: Vec<Uuid>,
    category: Option<Uuid>,
    status: PostStatus,
    created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author: Uuid, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            author,
            tags: Vec::new(),
            category: None,
            status: PostStatus::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Uuid>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_category(mut self, category: Uuid) -> Self {
        self.category = Some(category);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Uuid {
        self.author
    }

    pub fn tags(&self) -> &[Uuid] {
        &self.tags
    }

    pub fn category(&self) -> Option<Uuid> {
        self.category
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_tags(&mut self, tags: Vec<Uuid>) {
        self.tags = tags;
    }

    pub fn set_category(&mut self, category: Option<Uuid>) {
        self.category = category;
    }

    pub fn set_status(&mut self, status: PostStatus) {
        self.status = status;
    }
}
