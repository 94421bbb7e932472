//! Like infrastructure

mod repository;
mod service;

pub use repository::InMemoryLikeRepository;
pub use service::LikeService;
