//! Infrastructure: repositories, services and the notification backend

pub mod api_key;
pub mod comment;
pub mod like;
pub mod logging;
pub mod notification;
pub mod post;
pub mod taxonomy;
pub mod user;
