//! In-memory like repository
//!
//! The (author, post) pair index and the id map live under one lock, so
//! the uniqueness check and the insert form a single critical section.
//! Concurrent duplicate attempts resolve to exactly one winner.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::like::{Like, LikeRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct LikeIndex {
    by_id: HashMap<Uuid, Like>,
    pairs: HashSet<(Uuid, Uuid)>,
}

#[derive(Debug, Default)]
pub struct InMemoryLikeRepository {
    index: RwLock<LikeIndex>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn create(&self, like: Like) -> Result<Like, DomainError> {
        let mut index = self
            .index
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !index.pairs.insert((like.author(), like.post())) {
            return Err(DomainError::conflict("Like already exists for this post."));
        }

        index.by_id.insert(like.id(), like.clone());
        Ok(like)
    }

    async fn delete_owned(&self, id: Uuid, author: Uuid) -> Result<bool, DomainError> {
        let mut index = self
            .index
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        match index.by_id.get(&id) {
            Some(like) if like.author() == author => {
                let pair = (like.author(), like.post());
                index.by_id.remove(&id);
                index.pairs.remove(&pair);
                Ok(true)
            }
            // Absent and foreign-owned are indistinguishable to callers.
            _ => Ok(false),
        }
    }

    async fn list_by_post(&self, post: Uuid) -> Result<Vec<Like>, DomainError> {
        let index = self
            .index
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(index
            .by_id
            .values()
            .filter(|l| l.post() == post)
            .cloned()
            .collect())
    }

    async fn list_by_author(&self, author: Uuid) -> Result<Vec<Like>, DomainError> {
        let index = self
            .index
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(index
            .by_id
            .values()
            .filter(|l| l.author() == author)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Like>, DomainError> {
        let index = self
            .index
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(index.by_id.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_duplicate_pair_conflicts() {
        let repo = InMemoryLikeRepository::new();
        let (author, post) = (Uuid::new_v4(), Uuid::new_v4());

        repo.create(Like::new(author, post)).await.unwrap();
        let err = repo.create(Like::new(author, post)).await.unwrap_err();

        assert_eq!(err.to_string(), "Conflict: Like already exists for this post.");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_same_author_different_posts_allowed() {
        let repo = InMemoryLikeRepository::new();
        let author = Uuid::new_v4();

        repo.create(Like::new(author, Uuid::new_v4())).await.unwrap();
        repo.create(Like::new(author, Uuid::new_v4())).await.unwrap();

        assert_eq!(repo.list_by_author(author).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_owned_scopes_to_author() {
        let repo = InMemoryLikeRepository::new();
        let owner = Uuid::new_v4();
        let like = repo.create(Like::new(owner, Uuid::new_v4())).await.unwrap();

        // Foreign caller gets the same answer as for a missing id.
        assert!(!repo.delete_owned(like.id(), Uuid::new_v4()).await.unwrap());
        assert!(!repo.delete_owned(Uuid::new_v4(), owner).await.unwrap());

        assert!(repo.delete_owned(like.id(), owner).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_frees_pair_for_relike() {
        let repo = InMemoryLikeRepository::new();
        let (author, post) = (Uuid::new_v4(), Uuid::new_v4());

        let like = repo.create(Like::new(author, post)).await.unwrap();
        repo.delete_owned(like.id(), author).await.unwrap();

        repo.create(Like::new(author, post)).await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_duplicates_have_one_winner() {
        let repo = Arc::new(InMemoryLikeRepository::new());
        let (author, post) = (Uuid::new_v4(), Uuid::new_v4());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(Like::new(author, post)).await
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(DomainError::Conflict { .. }) => conflicts += 1,
                Err(other) => panic!("unexpected error: {}", other),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
