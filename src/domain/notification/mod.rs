//! Notification domain module

mod bus;
mod message;

pub use bus::NotificationBus;
pub use message::{NotificationMessage, Topic};
