//! In-memory notification bus
//!
//! Topic registry backed by `tokio::sync::broadcast` channels, one per
//! topic with at least one live subscriber. Suitable for single-instance
//! deployments; the `NotificationBus` seam admits a networked backend for
//! multi-instance setups without touching callers.

use std::collections::HashMap;

use async_trait::async_trait;
use metrics::counter;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

use crate::domain::notification::{NotificationBus, NotificationMessage, Topic};
use crate::domain::DomainError;

const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Counter of publishes that reached zero subscribers or failed outright
pub const DROPPED_NOTIFICATIONS: &str = "notifications_dropped_total";

#[derive(Debug)]
pub struct InMemoryNotificationBus {
    capacity: usize,
    topics: RwLock<HashMap<String, broadcast::Sender<NotificationMessage>>>,
}

impl InMemoryNotificationBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Capacity bounds the per-topic backlog for slow subscribers; a
    /// subscriber that lags past it misses messages, which is within the
    /// at-most-once contract.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            topics: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live topics (for tests and diagnostics)
    pub async fn topic_count(&self) -> usize {
        self.topics.read().await.len()
    }
}

impl Default for InMemoryNotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationBus for InMemoryNotificationBus {
    async fn subscribe(&self, topic: &Topic) -> broadcast::Receiver<NotificationMessage> {
        let mut topics = self.topics.write().await;

        topics
            .entry(topic.as_str().to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    async fn leave(&self, topic: &Topic) {
        let mut topics = self.topics.write().await;

        // The caller's receiver is already dropped; prune the channel once
        // nobody is listening so the registry cannot grow without bound.
        if let Some(sender) = topics.get(topic.as_str()) {
            if sender.receiver_count() == 0 {
                topics.remove(topic.as_str());
                debug!(%topic, "topic pruned");
            }
        }
    }

    async fn publish(
        &self,
        topic: &Topic,
        message: NotificationMessage,
    ) -> Result<usize, DomainError> {
        let topics = self.topics.read().await;

        let Some(sender) = topics.get(topic.as_str()) else {
            counter!(DROPPED_NOTIFICATIONS).increment(1);
            debug!(%topic, "publish to topic with no subscribers");
            return Ok(0);
        };

        match sender.send(message) {
            Ok(delivered) => Ok(delivered),
            Err(_) => {
                // Subscribers vanished between lookup and send.
                counter!(DROPPED_NOTIFICATIONS).increment(1);
                warn!(%topic, "notification dropped, no live subscribers");
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_subscriber_receives_published_message() {
        let bus = InMemoryNotificationBus::new();
        let topic = Topic::for_post(Uuid::new_v4());

        let mut rx = bus.subscribe(&topic).await;
        let delivered = bus
            .publish(&topic, NotificationMessage::post_liked())
            .await
            .unwrap();

        assert_eq!(delivered, 1);
        assert_eq!(rx.recv().await.unwrap(), NotificationMessage::post_liked());
    }

    #[tokio::test]
    async fn test_topics_are_isolated() {
        let bus = InMemoryNotificationBus::new();
        let liked = Topic::for_post(Uuid::new_v4());
        let other = Topic::for_post(Uuid::new_v4());

        let mut rx = bus.subscribe(&other).await;
        bus.publish(&liked, NotificationMessage::post_liked())
            .await
            .unwrap();

        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_a_noop() {
        let bus = InMemoryNotificationBus::new();
        let topic = Topic::for_post(Uuid::new_v4());

        let delivered = bus
            .publish(&topic, NotificationMessage::post_liked())
            .await
            .unwrap();
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_nothing() {
        let bus = InMemoryNotificationBus::new();
        let topic = Topic::for_post(Uuid::new_v4());

        // Keep the topic alive with one member, publish, then join.
        let _early = bus.subscribe(&topic).await;
        bus.publish(&topic, NotificationMessage::post_liked())
            .await
            .unwrap();

        let mut late = bus.subscribe(&topic).await;
        assert!(matches!(
            late.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_fan_out_reaches_every_member() {
        let bus = InMemoryNotificationBus::new();
        let topic = Topic::for_post(Uuid::new_v4());

        let mut a = bus.subscribe(&topic).await;
        let mut b = bus.subscribe(&topic).await;
        let mut c = bus.subscribe(&topic).await;

        let delivered = bus
            .publish(&topic, NotificationMessage::post_liked())
            .await
            .unwrap();
        assert_eq!(delivered, 3);

        for rx in [&mut a, &mut b, &mut c] {
            assert_eq!(rx.recv().await.unwrap(), NotificationMessage::post_liked());
        }
    }

    #[tokio::test]
    async fn test_publish_order_preserved_within_topic() {
        let bus = InMemoryNotificationBus::new();
        let topic = Topic::for_post(Uuid::new_v4());
        let mut rx = bus.subscribe(&topic).await;

        for i in 0..5 {
            let message = NotificationMessage {
                kind: "send_notification".to_string(),
                message: format!("like {}", i),
            };
            bus.publish(&topic, message).await.unwrap();
        }

        for i in 0..5 {
            assert_eq!(rx.recv().await.unwrap().message, format!("like {}", i));
        }
    }

    #[tokio::test]
    async fn test_leave_prunes_empty_topics() {
        let bus = InMemoryNotificationBus::new();
        let topic = Topic::for_post(Uuid::new_v4());

        let rx = bus.subscribe(&topic).await;
        assert_eq!(bus.topic_count().await, 1);

        drop(rx);
        bus.leave(&topic).await;
        assert_eq!(bus.topic_count().await, 0);
    }

    #[tokio::test]
    async fn test_leave_keeps_populated_topics() {
        let bus = InMemoryNotificationBus::new();
        let topic = Topic::for_post(Uuid::new_v4());

        let _keep = bus.subscribe(&topic).await;
        let gone = bus.subscribe(&topic).await;

        drop(gone);
        bus.leave(&topic).await;
        assert_eq!(bus.topic_count().await, 1);
    }
}
