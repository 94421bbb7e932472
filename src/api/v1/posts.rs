//! Post handlers
//!
//! `/posts` routes are scoped to the caller's own posts. `/postlist` is
//! the cross-author feed of published posts; it is the one route that
//! demands an API key on top of the bearer token.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::api::middleware::{RequireApiKey, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResult, Envelope};
use crate::domain::post::{Post, PostStatus};
use crate::infrastructure::post::{DeleteOutcome, PostDraft};

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<Uuid>,
    #[serde(default)]
    pub category: Option<Uuid>,
    #[serde(default)]
    pub status: Option<PostStatus>,
}

impl From<PostBody> for PostDraft {
    fn from(body: PostBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            tags: body.tags,
            category: body.category,
            status: body.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// POST /v1/posts
pub async fn create_post(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(body): Json<PostBody>,
) -> ApiResult<Post> {
    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title must not be empty"));
    }

    let post = state.post_service.create(user.id(), body.into()).await?;
    debug!(post = %post.id(), "post created");

    Ok(Envelope::success(post))
}

/// GET /v1/posts
pub async fn list_own_posts(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> ApiResult<Vec<Post>> {
    let posts = state.post_service.list_by_author(user.id()).await?;
    Ok(Envelope::success(posts))
}

/// GET /v1/posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(post_id): Path<Uuid>,
) -> ApiResult<Post> {
    // A foreign post reads the same as a missing one.
    let post = state
        .post_service
        .get(post_id)
        .await?
        .filter(|p| p.author() == user.id())
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    Ok(Envelope::success(post))
}

/// PUT /v1/posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(post_id): Path<Uuid>,
    Json(body): Json<PostBody>,
) -> ApiResult<Post> {
    let post = state
        .post_service
        .update(post_id, user.id(), body.into())
        .await?;

    Ok(Envelope::success(post))
}

/// POST /v1/posts/{post_id}/publish
pub async fn publish_post(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(post_id): Path<Uuid>,
) -> ApiResult<Post> {
    let post = state.post_service.publish(post_id, user.id()).await?;
    Ok(Envelope::success(post))
}

/// DELETE /v1/posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(post_id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    let outcome = state.post_service.delete(post_id, user.id()).await?;

    let detail = match outcome {
        DeleteOutcome::Archived => "Post archived successfully",
        DeleteOutcome::Deleted => "Post deleted successfully",
    };

    Ok(Envelope::success(serde_json::json!({ "detail": detail })))
}

/// GET /v1/postlist
pub async fn list_published_posts(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    RequireApiKey(_api_key): RequireApiKey,
    Query(query): Query<PostListQuery>,
) -> ApiResult<Vec<Post>> {
    let posts = state
        .post_service
        .list(query.search.as_deref())
        .await?
        .into_iter()
        .filter(Post::is_published)
        .collect();

    Ok(Envelope::success(posts))
}
