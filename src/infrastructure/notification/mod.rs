//! Notification infrastructure

mod in_memory;

pub use in_memory::{InMemoryNotificationBus, DROPPED_NOTIFICATIONS};
