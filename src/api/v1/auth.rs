//! Signup, login and logout handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResult, Envelope};
use crate::domain::user::User;
use crate::infrastructure::user::SignupRequest;

#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// POST /v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> ApiResult<User> {
    let user = state
        .user_service
        .signup(SignupRequest {
            username: body.username,
            email: body.email,
            password: body.password,
            bio: body.bio,
        })
        .await?;

    Ok(Envelope::success(user))
}

/// POST /v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> ApiResult<LoginResponse> {
    let user = state
        .user_service
        .authenticate(&body.username, &body.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    let token = state.token_service.issue(user.id()).await?;
    debug!(user = %user.id(), "login succeeded");

    Ok(Envelope::success(LoginResponse { token, user }))
}

/// POST /v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> ApiResult<serde_json::Value> {
    state.token_service.revoke_all(user.id()).await?;
    debug!(user = %user.id(), "logged out");

    Ok(Envelope::success(serde_json::json!({
        "detail": "Logged out"
    })))
}
