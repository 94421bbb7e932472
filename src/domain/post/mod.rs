//! Post domain module

mod entity;
mod repository;

pub use entity::{Post, PostStatus};
pub use repository::PostRepository;
