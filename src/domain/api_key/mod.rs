//! API key domain module

mod entity;
mod repository;

pub use entity::ApiKey;
pub use repository::ApiKeyRepository;
