//! User domain module

mod entity;
mod repository;

pub use entity::{User, UserRole};
pub use repository::UserRepository;
