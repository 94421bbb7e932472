//! Versioned API endpoints

pub mod auth;
pub mod categories;
pub mod comments;
pub mod likes;
pub mod notifications;
pub mod posts;
pub mod tags;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/users", get(users::list_users))
        .route(
            "/users/me",
            get(users::profile).patch(users::update_profile),
        )
        .route("/users/{user_id}", get(users::get_user))
        .route("/posts", post(posts::create_post).get(posts::list_own_posts))
        .route(
            "/posts/{post_id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/{post_id}/publish", post(posts::publish_post))
        .route("/postlist", get(posts::list_published_posts))
        .route("/likes", post(likes::create_like).get(likes::list_likes))
        .route("/likes/{like_id}", axum::routing::delete(likes::delete_like))
        .route(
            "/comments",
            post(comments::create_comment).get(comments::list_comments),
        )
        .route(
            "/comments/{comment_id}",
            axum::routing::put(comments::update_comment).delete(comments::delete_comment),
        )
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/tags/{tag_id}",
            axum::routing::put(tags::update_tag).delete(tags::delete_tag),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{category_id}",
            axum::routing::put(categories::update_category).delete(categories::delete_category),
        )
}
