//! Application state shared across handlers

use std::sync::Arc;

use crate::domain::category::CategoryRepository;
use crate::domain::comment::CommentRepository;
use crate::domain::notification::NotificationBus;
use crate::domain::tag::TagRepository;
use crate::infrastructure::api_key::ApiKeyService;
use crate::infrastructure::like::LikeService;
use crate::infrastructure::post::PostService;
use crate::infrastructure::user::{TokenService, UserService};

/// Shared services and repositories. Request handlers hold this by clone;
/// everything inside is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub api_key_service: Arc<ApiKeyService>,
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
    pub post_service: Arc<PostService>,
    pub like_service: Arc<LikeService>,
    pub comment_repository: Arc<dyn CommentRepository>,
    pub tag_repository: Arc<dyn TagRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub notification_bus: Arc<dyn NotificationBus>,
}
