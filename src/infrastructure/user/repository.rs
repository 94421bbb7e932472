//! In-memory user repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(users.values().find(|u| u.username() == username).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if users.values().any(|u| u.username() == user.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' is already taken",
                user.username()
            )));
        }

        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !users.contains_key(&user.id()) {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        users.insert(user.id(), user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(users.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(users.values().cloned().collect())
    }
}
