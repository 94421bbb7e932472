//! In-memory post repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::post::{Post, PostRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let posts = self
            .posts
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(posts.get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let mut posts = self
            .posts
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        posts.insert(post.id(), post.clone());
        Ok(post)
    }

    async fn update(&self, post: &Post) -> Result<Post, DomainError> {
        let mut posts = self
            .posts
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !posts.contains_key(&post.id()) {
            return Err(DomainError::not_found(format!(
                "Post '{}' not found",
                post.id()
            )));
        }

        posts.insert(post.id(), post.clone());
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut posts = self
            .posts
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(posts.remove(&id).is_some())
    }

    async fn list_by_author(&self, author: Uuid) -> Result<Vec<Post>, DomainError> {
        let posts = self
            .posts
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Post> = posts
            .values()
            .filter(|p| p.author() == author)
            .cloned()
            .collect();
        newest_first(&mut result);
        Ok(result)
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Post>, DomainError> {
        let posts = self
            .posts
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let needle = search.map(str::to_lowercase);
        let mut result: Vec<Post> = posts
            .values()
            .filter(|p| match &needle {
                Some(n) => {
                    p.title().to_lowercase().contains(n)
                        || p.content().to_lowercase().contains(n)
                }
                None => true,
            })
            .cloned()
            .collect();
        newest_first(&mut result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_by_author_is_scoped() {
        let repo = InMemoryPostRepository::new();
        let author = Uuid::new_v4();

        repo.create(Post::new(author, "mine", "content")).await.unwrap();
        repo.create(Post::new(Uuid::new_v4(), "theirs", "content"))
            .await
            .unwrap();

        let posts = repo.list_by_author(author).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title(), "mine");
    }

    #[tokio::test]
    async fn test_search_matches_title_and_content() {
        let repo = InMemoryPostRepository::new();
        let author = Uuid::new_v4();

        repo.create(Post::new(author, "Rust tips", "borrow checker"))
            .await
            .unwrap();
        repo.create(Post::new(author, "Gardening", "growing rust-colored roses"))
            .await
            .unwrap();
        repo.create(Post::new(author, "Cooking", "pasta"))
            .await
            .unwrap();

        let hits = repo.list(Some("rust")).await.unwrap();
        assert_eq!(hits.len(), 2);

        let all = repo.list(None).await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
