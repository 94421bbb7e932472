//! Post service
//!
//! Carries the publication rules: publishing is a one-way action that
//! fails on an already-published post, and deleting a published post
//! archives it back to draft instead of removing it.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::post::{Post, PostRepository, PostStatus};
use crate::domain::DomainError;

/// Fields accepted when creating or updating a post
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<Uuid>,
    pub category: Option<Uuid>,
    pub status: Option<PostStatus>,
}

/// Outcome of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The post was published; it was archived back to draft instead
    Archived,
    /// The draft was removed
    Deleted,
}

#[derive(Debug)]
pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, author: Uuid, draft: PostDraft) -> Result<Post, DomainError> {
        let mut post = Post::new(author, draft.title, draft.content).with_tags(draft.tags);
        if let Some(category) = draft.category {
            post = post.with_category(category);
        }
        if let Some(status) = draft.status {
            post = post.with_status(status);
        }

        self.repository.create(post).await
    }

    /// Update a post owned by the caller. A foreign post reads as absent.
    pub async fn update(
        &self,
        id: Uuid,
        author: Uuid,
        draft: PostDraft,
    ) -> Result<Post, DomainError> {
        let mut post = self.get_owned(id, author).await?;

        post.set_title(draft.title);
        post.set_content(draft.content);
        post.set_tags(draft.tags);
        post.set_category(draft.category);
        if let Some(status) = draft.status {
            post.set_status(status);
        }

        self.repository.update(&post).await
    }

    /// Move a draft to published. Publishing twice fails.
    pub async fn publish(&self, id: Uuid, author: Uuid) -> Result<Post, DomainError> {
        let mut post = self.get_owned(id, author).await?;

        if post.is_published() {
            return Err(DomainError::validation("Already posted"));
        }

        post.set_status(PostStatus::Published);
        info!(%id, "post published");
        self.repository.update(&post).await
    }

    /// Delete a post. A published post is archived to draft; a draft is
    /// removed outright.
    pub async fn delete(&self, id: Uuid, author: Uuid) -> Result<DeleteOutcome, DomainError> {
        let mut post = self.get_owned(id, author).await?;

        if post.is_published() {
            post.set_status(PostStatus::Draft);
            self.repository.update(&post).await?;
            info!(%id, "post archived");
            return Ok(DeleteOutcome::Archived);
        }

        self.repository.delete(id).await?;
        Ok(DeleteOutcome::Deleted)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn list_by_author(&self, author: Uuid) -> Result<Vec<Post>, DomainError> {
        self.repository.list_by_author(author).await
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Post>, DomainError> {
        self.repository.list(search).await
    }

    async fn get_owned(&self, id: Uuid, author: Uuid) -> Result<Post, DomainError> {
        let post = self
            .repository
            .get(id)
            .await?
            .filter(|p| p.author() == author)
            .ok_or_else(|| DomainError::not_found("Post not found"))?;
        Ok(post)
    }
}
