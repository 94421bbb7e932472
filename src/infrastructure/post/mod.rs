//! Post infrastructure

mod repository;
mod service;

pub use repository::InMemoryPostRepository;
pub use service::{DeleteOutcome, PostDraft, PostService};
