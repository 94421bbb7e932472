//! API key infrastructure: parsing, generation, storage and verification

pub mod generator;
pub mod parser;
mod repository;
mod service;

pub use generator::{ApiKeyGenerator, GeneratedKey};
pub use parser::{parse_key, MalformedKey, ParsedKey};
pub use repository::InMemoryApiKeyRepository;
pub use service::{ApiKeyService, CreateApiKeyResult};
