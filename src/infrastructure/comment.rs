//! In-memory comment repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::comment::{Comment, CommentRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<HashMap<Uuid, Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Comment>, DomainError> {
        let comments = self
            .comments
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(comments.get(&id).cloned())
    }

    async fn create(&self, comment: Comment) -> Result<Comment, DomainError> {
        let mut comments = self
            .comments
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        comments.insert(comment.id(), comment.clone());
        Ok(comment)
    }

    async fn update(&self, comment: &Comment) -> Result<Comment, DomainError> {
        let mut comments = self
            .comments
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !comments.contains_key(&comment.id()) {
            return Err(DomainError::not_found(format!(
                "Comment '{}' not found",
                comment.id()
            )));
        }

        comments.insert(comment.id(), comment.clone());
        Ok(comment.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut comments = self
            .comments
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(comments.remove(&id).is_some())
    }

    async fn list_by_post(&self, post: Uuid) -> Result<Vec<Comment>, DomainError> {
        let comments = self
            .comments
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Comment> = comments
            .values()
            .filter(|c| c.post() == post)
            .cloned()
            .collect();
        result.sort_by_key(|c| c.created_at());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_by_post() {
        let repo = InMemoryCommentRepository::new();
        let post = Uuid::new_v4();

        repo.create(Comment::new(Uuid::new_v4(), post, "first"))
            .await
            .unwrap();
        repo.create(Comment::new(Uuid::new_v4(), post, "second"))
            .await
            .unwrap();
        repo.create(Comment::new(Uuid::new_v4(), Uuid::new_v4(), "elsewhere"))
            .await
            .unwrap();

        let comments = repo.list_by_post(post).await.unwrap();
        assert_eq!(comments.len(), 2);
    }
}
