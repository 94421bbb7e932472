//! In-memory tag and category repositories
//!
//! Both are name-unique flat lists; the two implementations mirror each
//! other deliberately.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::{Category, CategoryRepository};
use crate::domain::tag::{Tag, TagRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryTagRepository {
    tags: RwLock<HashMap<Uuid, Tag>>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Tag>, DomainError> {
        let tags = self
            .tags
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(tags.get(&id).cloned())
    }

    async fn create(&self, tag: Tag) -> Result<Tag, DomainError> {
        let mut tags = self
            .tags
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if tags.values().any(|t| t.name() == tag.name()) {
            return Err(DomainError::conflict(format!(
                "Tag '{}' already exists",
                tag.name()
            )));
        }

        tags.insert(tag.id(), tag.clone());
        Ok(tag)
    }

    async fn update(&self, tag: &Tag) -> Result<Tag, DomainError> {
        let mut tags = self
            .tags
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !tags.contains_key(&tag.id()) {
            return Err(DomainError::not_found(format!(
                "Tag '{}' not found",
                tag.id()
            )));
        }

        tags.insert(tag.id(), tag.clone());
        Ok(tag.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tags = self
            .tags
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(tags.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Tag>, DomainError> {
        let tags = self
            .tags
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Tag> = tags.values().cloned().collect();
        result.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(result)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if categories.values().any(|c| c.name() == category.name()) {
            return Err(DomainError::conflict(format!(
                "Category '{}' already exists",
                category.name()
            )));
        }

        categories.insert(category.id(), category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !categories.contains_key(&category.id()) {
            return Err(DomainError::not_found(format!(
                "Category '{}' not found",
                category.id()
            )));
        }

        categories.insert(category.id(), category.clone());
        Ok(category.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Category> = categories.values().cloned().collect();
        result.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_tag_name_conflicts() {
        let repo = InMemoryTagRepository::new();

        repo.create(Tag::new("rust")).await.unwrap();
        let err = repo.create(Tag::new("rust")).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_category_name_conflicts() {
        let repo = InMemoryCategoryRepository::new();

        repo.create(Category::new("tech")).await.unwrap();
        let err = repo.create(Category::new("tech")).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_name() {
        let repo = InMemoryTagRepository::new();

        repo.create(Tag::new("zig")).await.unwrap();
        repo.create(Tag::new("ada")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["ada", "zig"]);
    }
}
