//! Blog platform API
//!
//! A blogging backend with token-authenticated CRUD for posts, comments,
//! likes, tags and categories, API-key-gated feeds, and near-real-time
//! like notifications pushed to WebSocket subscribers over a topic-keyed
//! in-process notification bus.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::notification::NotificationBus;
use domain::post::PostRepository;
use infrastructure::comment::InMemoryCommentRepository;
use infrastructure::taxonomy::{InMemoryCategoryRepository, InMemoryTagRepository};
use infrastructure::user::{
    Argon2Hasher, InMemoryTokenRepository, InMemoryUserRepository, PasswordHasher, TokenService,
    UserService,
};
use infrastructure::{
    api_key::{ApiKeyService, InMemoryApiKeyRepository},
    like::{InMemoryLikeRepository, LikeService},
    notification::InMemoryNotificationBus,
    post::{InMemoryPostRepository, PostService},
};

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());

    let api_key_service = Arc::new(ApiKeyService::new(
        Arc::new(InMemoryApiKeyRepository::new()),
        Arc::clone(&hasher),
    ));

    let user_service = Arc::new(UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::clone(&hasher),
    ));
    let token_service = Arc::new(TokenService::new(Arc::new(InMemoryTokenRepository::new())));

    let post_repository: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
    let post_service = Arc::new(PostService::new(Arc::clone(&post_repository)));

    let notification_bus: Arc<dyn NotificationBus> = Arc::new(InMemoryNotificationBus::new());
    let like_service = Arc::new(LikeService::new(
        Arc::new(InMemoryLikeRepository::new()),
        Arc::clone(&post_repository),
        Arc::clone(&notification_bus),
    ));

    Ok(AppState {
        api_key_service,
        user_service,
        token_service,
        post_service,
        like_service,
        comment_repository: Arc::new(InMemoryCommentRepository::new()),
        tag_repository: Arc::new(InMemoryTagRepository::new()),
        category_repository: Arc::new(InMemoryCategoryRepository::new()),
        notification_bus,
    })
}
