//! API key generation
//!
//! Produces two-part credentials `<prefix>.<secret>`: an 8-character
//! alphanumeric prefix used for lookup and a 32-character alphanumeric
//! secret. The joined form is shown exactly once at creation.

use rand::distributions::Alphanumeric;
use rand::Rng;

const PREFIX_LEN: usize = 8;
const SECRET_LEN: usize = 32;

/// Result of generating a new credential
#[derive(Debug, Clone)]
pub struct GeneratedKey {
    /// Public lookup prefix
    pub prefix: String,
    /// Secret suffix, to be hashed before storage
    pub secret: String,
}

impl GeneratedKey {
    /// The full presentable credential
    pub fn credential(&self) -> String {
        format!("{}.{}", self.prefix, self.secret)
    }
}

/// Generator for two-part API key credentials
#[derive(Debug, Clone, Default)]
pub struct ApiKeyGenerator;

impl ApiKeyGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self) -> GeneratedKey {
        GeneratedKey {
            prefix: random_alphanumeric(PREFIX_LEN),
            secret: random_alphanumeric(SECRET_LEN),
        }
    }
}

fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
