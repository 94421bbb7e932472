//! Like handlers
//!
//! The create path is the hot one: persist the (author, post) pair, then
//! the service fans the notification out to the post's subscribers off
//! the request path.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResult, Envelope};
use crate::domain::like::Like;
use crate::domain::DomainError;

#[derive(Debug, Deserialize)]
pub struct LikeBody {
    pub post: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct LikeListQuery {
    #[serde(default)]
    pub post: Option<Uuid>,
    #[serde(default)]
    pub author: Option<Uuid>,
}

/// POST /v1/likes
pub async fn create_like(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(body): Json<LikeBody>,
) -> ApiResult<Like> {
    let like = state
        .like_service
        .create(user.id(), body.post)
        .await
        .map_err(|e| match e {
            DomainError::Storage { .. } | DomainError::Internal { .. } => {
                ApiError::internal("Failed to create like.")
            }
            other => other.into(),
        })?;

    Ok(Envelope::success(like))
}

/// DELETE /v1/likes/{like_id}
pub async fn delete_like(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(like_id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    state.like_service.delete(like_id, user.id()).await?;
    Ok(Envelope::success(serde_json::json!({ "detail": "Like removed" })))
}

/// GET /v1/likes
pub async fn list_likes(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Query(query): Query<LikeListQuery>,
) -> ApiResult<Vec<Like>> {
    let likes = state.like_service.list(query.post, query.author).await?;
    Ok(Envelope::success(likes))
}
