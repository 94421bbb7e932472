//! Like entity
//!
//! A like is the (author, post) tuple. At most one like exists per pair;
//! the store enforces that atomically so concurrent duplicates resolve to
//! exactly one winner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    id: Uuid,
    author: Uuid,
    post: Uuid,
    created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(author: Uuid, post: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            post,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
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
}
