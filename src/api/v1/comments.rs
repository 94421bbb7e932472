//! Comment handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResult, Envelope};
use crate::domain::comment::Comment;

#[derive(Debug, Deserialize)]
pub struct CreateCommentBody {
    pub post: Uuid,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentBody {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentListQuery {
    pub post: Uuid,
}

/// POST /v1/comments
pub async fn create_comment(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(body): Json<CreateCommentBody>,
) -> ApiResult<Comment> {
    if body.content.trim().is_empty() {
        return Err(ApiError::bad_request("Comment must not be empty"));
    }

    state
        .post_service
        .get(body.post)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    let comment = state
        .comment_repository
        .create(Comment::new(user.id(), body.post, body.content))
        .await?;

    Ok(Envelope::success(comment))
}

/// GET /v1/comments?post={post_id}
pub async fn list_comments(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Query(query): Query<CommentListQuery>,
) -> ApiResult<Vec<Comment>> {
    let comments = state.comment_repository.list_by_post(query.post).await?;
    Ok(Envelope::success(comments))
}

/// PUT /v1/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(comment_id): Path<Uuid>,
    Json(body): Json<UpdateCommentBody>,
) -> ApiResult<Comment> {
    if body.content.trim().is_empty() {
        return Err(ApiError::bad_request("Comment must not be empty"));
    }

    // A foreign comment reads the same as a missing one.
    let mut comment = state
        .comment_repository
        .get(comment_id)
        .await?
        .filter(|c| c.author() == user.id())
        .ok_or_else(|| ApiError::not_found("Comment not found"))?;

    comment.set_content(body.content);
    let updated = state.comment_repository.update(&comment).await?;

    Ok(Envelope::success(updated))
}

/// DELETE /v1/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(comment_id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    let comment = state
        .comment_repository
        .get(comment_id)
        .await?
        .filter(|c| c.author() == user.id())
        .ok_or_else(|| ApiError::not_found("Comment not found"))?;

    state.comment_repository.delete(comment.id()).await?;
    Ok(Envelope::success(serde_json::json!({ "detail": "Comment deleted" })))
}
