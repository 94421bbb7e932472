//! Domain model: entities, repository traits, and the notification bus seam

pub mod api_key;
pub mod category;
pub mod comment;
pub mod error;
pub mod like;
pub mod notification;
pub mod post;
pub mod tag;
pub mod user;

pub use error::DomainError;
