//! Tag handlers. Mutation is admin-only; any authenticated user can read.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::{RequireAdmin, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResult, Envelope};
use crate::domain::tag::Tag;

#[derive(Debug, Deserialize)]
pub struct TagBody {
    pub name: String,
}

/// GET /v1/tags
pub async fn list_tags(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
) -> ApiResult<Vec<Tag>> {
    let tags = state.tag_repository.list().await?;
    Ok(Envelope::success(tags))
}

/// POST /v1/tags
pub async fn create_tag(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<TagBody>,
) -> ApiResult<Tag> {
    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("Tag name must not be empty"));
    }

    let tag = state.tag_repository.create(Tag::new(body.name)).await?;
    Ok(Envelope::success(tag))
}

/// PUT /v1/tags/{tag_id}
pub async fn update_tag(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(tag_id): Path<Uuid>,
    Json(body): Json<TagBody>,
) -> ApiResult<Tag> {
    let mut tag = state
        .tag_repository
        .get(tag_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag not found"))?;

    tag.set_name(body.name);
    let updated = state.tag_repository.update(&tag).await?;

    Ok(Envelope::success(updated))
}

/// DELETE /v1/tags/{tag_id}
pub async fn delete_tag(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(tag_id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    if !state.tag_repository.delete(tag_id).await? {
        return Err(ApiError::not_found("Tag not found"));
    }

    Ok(Envelope::success(serde_json::json!({ "detail": "Tag deleted" })))
}
