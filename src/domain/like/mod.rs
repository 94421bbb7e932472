//! Like domain module

mod entity;
mod repository;

pub use entity::Like;
pub use repository::LikeRepository;
