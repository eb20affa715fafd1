//! Handlers for the `/users` resource.

use axum::extract::State;
use jobboard_db::models::user::{UpdateUser, UserResponse};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::accounts;
use crate::state::AppState;

/// Request body for `PATCH /users/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
    /// Admin only.
    pub is_active: Option<bool>,
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<UserResponse>> {
    Ok(ApiResponse::ok(accounts::get_user(&state.pool, id).await?))
}

/// PATCH /api/v1/users/{id}
pub async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateUserRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    let patch = UpdateUser {
        name: input.name,
        email: input.email,
        bio: input.bio,
        avatar_url: input.avatar_url,
        is_active: input.is_active,
    };
    let user = accounts::update_user(&state.pool, &auth, id, patch).await?;
    Ok(ApiResponse::ok(user).message("User updated"))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    accounts::delete_user(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("User"))
}
