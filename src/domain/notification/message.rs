//! Notification message and topic types
//!
//! Messages are ephemeral values: produced by the like handler, delivered
//! to whatever subscriber connections are live at that moment, and never
//! persisted. A subscriber that joins after a publish does not see it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Routing key grouping the subscriber connections of one post.
///
/// Purely a routing value: it has no stored representation and is derived
/// deterministically from the post id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    pub fn for_post(post_id: Uuid) -> Self {
        Self(format!("post_{}", post_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload pushed to subscribers of a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl NotificationMessage {
    /// The message pushed when a post receives a like
    pub fn post_liked() -> Self {
        Self {
            kind: "send_notification".to_string(),
            message: "Someone liked your post!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_derivation_is_deterministic() {
        let id = Uuid::new_v4();
        assert_eq!(Topic::for_post(id), Topic::for_post(id));
        assert_eq!(Topic::for_post(id).as_str(), format!("post_{}", id));
    }

    #[test]
    fn test_post_liked_wire_shape() {
        let json = serde_json::to_value(NotificationMessage::post_liked()).unwrap();
        assert_eq!(json["type"], "send_notification");
        assert_eq!(json["message"], "Someone liked your post!");
    }
}
