//! Category handlers. Mutation is admin-only; any authenticated user can read.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::{RequireAdmin, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResult, Envelope};
use crate::domain::category::Category;

#[derive(Debug, Deserialize)]
pub struct CategoryBody {
    pub name: String,
}

/// GET /v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
) -> ApiResult<Vec<Category>> {
    let categories = state.category_repository.list().await?;
    Ok(Envelope::success(categories))
}

/// POST /v1/categories
pub async fn create_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<CategoryBody>,
) -> ApiResult<Category> {
    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("Category name must not be empty"));
    }

    let category = state
        .category_repository
        .create(Category::new(body.name))
        .await?;

    Ok(Envelope::success(category))
}

/// PUT /v1/categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(category_id): Path<Uuid>,
    Json(body): Json<CategoryBody>,
) -> ApiResult<Category> {
    let mut category = state
        .category_repository
        .get(category_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;

    category.set_name(body.name);
    let updated = state.category_repository.update(&category).await?;

    Ok(Envelope::success(updated))
}

/// DELETE /v1/categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(category_id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    if !state.category_repository.delete(category_id).await? {
        return Err(ApiError::not_found("Category not found"));
    }

    Ok(Envelope::success(serde_json::json!({ "detail": "Category deleted" })))
}
