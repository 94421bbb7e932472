//! User profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::{RequireAdmin, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResult, Envelope};
use crate::domain::user::User;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileBody {
    pub bio: Option<String>,
}

/// GET /v1/users/me
pub async fn profile(RequireUser(user): RequireUser) -> ApiResult<User> {
    Ok(Envelope::success(user))
}

/// PATCH /v1/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(body): Json<UpdateProfileBody>,
) -> ApiResult<User> {
    let updated = state.user_service.update_bio(user.id(), body.bio).await?;
    Ok(Envelope::success(updated))
}

/// GET /v1/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<User> {
    let user = state
        .user_service
        .get(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Envelope::success(user))
}

/// GET /v1/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> ApiResult<Vec<User>> {
    let users = state.user_service.list().await?;
    Ok(Envelope::success(users))
}
