//! API key entity
//!
//! A key is a two-part credential: a public lookup prefix and a secret
//! suffix of which only a salted hash is stored. Keys are created by the
//! `create-key` CLI subcommand, never mutated, and revoked by deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored API key credential record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    id: Uuid,
    name: String,
    prefix: String,
    secret_hash: String,
    created_at: DateTime<Utc>,
}

impl ApiKey {
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        secret_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            prefix: prefix.into(),
            secret_hash: secret_hash.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Public lookup prefix. Narrows the candidate set but is not secret.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Salted one-way hash of the secret suffix. The plaintext secret is
    /// shown exactly once at creation and never stored.
    pub fn secret_hash(&self) -> &str {
        &self.secret_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_key_has_unique_id() {
        let a = ApiKey::new("ci", "eNR3fmpc", "$argon2id$fake");
        let b = ApiKey::new("ci", "eNR3fmpc", "$argon2id$fake");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.prefix(), b.prefix());
    }
}
