//! Notification bus trait
//!
//! Topic-addressed publish/subscribe, decoupled from the HTTP
//! request/response cycle. The bus is an injected collaborator: the
//! default backend is an in-process registry, but the seam allows a
//! networked pub/sub service for multi-instance deployments.

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::broadcast;

use super::message::{NotificationMessage, Topic};
use crate::domain::DomainError;

#[async_trait]
pub trait NotificationBus: Send + Sync + Debug {
    /// Join a topic. The returned receiver lives for the duration of one
    /// subscriber connection; dropping it leaves the group.
    async fn subscribe(&self, topic: &Topic) -> broadcast::Receiver<NotificationMessage>;

    /// Prune a topic whose last subscriber has gone. Safe to call for
    /// topics that never existed or still have members.
    async fn leave(&self, topic: &Topic);

    /// Deliver a message to every current member of a topic. Best-effort
    /// and at-most-once: no acknowledgment, no retry, no replay. Returns
    /// the number of receivers the message was handed to.
    async fn publish(
        &self,
        topic: &Topic,
        message: NotificationMessage,
    ) -> Result<usize, DomainError>;
}
