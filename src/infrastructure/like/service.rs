//! Like service
//!
//! Orchestrates the core write path: validate the post, persist the
//! (author, post) tuple, then fan the notification out to the post's
//! topic. The publish happens on a spawned task so the HTTP response
//! never waits on subscriber delivery, and a bus failure never rolls the
//! persisted like back.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::like::{Like, LikeRepository};
use crate::domain::notification::{NotificationBus, NotificationMessage, Topic};
use crate::domain::post::PostRepository;
use crate::domain::DomainError;

#[derive(Debug)]
pub struct LikeService {
    likes: Arc<dyn LikeRepository>,
    posts: Arc<dyn PostRepository>,
    bus: Arc<dyn NotificationBus>,
}

impl LikeService {
    pub fn new(
        likes: Arc<dyn LikeRepository>,
        posts: Arc<dyn PostRepository>,
        bus: Arc<dyn NotificationBus>,
    ) -> Self {
        Self { likes, posts, bus }
    }

    /// Create a like and notify the post's subscribers.
    ///
    /// A duplicate (author, post) pair surfaces as a conflict; any other
    /// storage failure surfaces as-is. Once the insert has committed the
    /// outcome is success regardless of what happens on the bus.
    pub async fn create(&self, author: Uuid, post_id: Uuid) -> Result<Like, DomainError> {
        self.posts
            .get(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post not found"))?;

        let like = self.likes.create(Like::new(author, post_id)).await?;
        debug!(like = %like.id(), %post_id, "like created");

        let bus = Arc::clone(&self.bus);
        let topic = Topic::for_post(post_id);
        tokio::spawn(async move {
            match bus.publish(&topic, NotificationMessage::post_liked()).await {
                Ok(delivered) => debug!(%topic, delivered, "like notification published"),
                Err(e) => warn!(%topic, error = %e, "like notification failed"),
            }
        });

        Ok(like)
    }

    /// Delete a like owned by the caller. An id that does not exist and
    /// an id owned by someone else produce the same not-found outcome.
    pub async fn delete(&self, id: Uuid, author: Uuid) -> Result<(), DomainError> {
        if self.likes.delete_owned(id, author).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("Like not found"))
        }
    }

    pub async fn list(
        &self,
        post: Option<Uuid>,
        author: Option<Uuid>,
    ) -> Result<Vec<Like>, DomainError> {
        match (post, author) {
            (Some(post), _) => self.likes.list_by_post(post).await,
            (None, Some(author)) => self.likes.list_by_author(author).await,
            (None, None) => self.likes.list().await,
        }
    }
}
