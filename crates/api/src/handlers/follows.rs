//! Handlers for following users and enterprises.

use axum::extract::State;
use jobboard_db::models::follow::{EnterpriseFollow, UserFollow};
use jobboard_db::models::user::UserSummary;

use crate::error::AppResult;
use crate::extract::IdPath;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::follows;
use crate::state::AppState;

/// POST /api/v1/users/{id}/follow
pub async fn follow_user(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<UserFollow>> {
    let follow = follows::follow_user(&state.pool, &auth, id).await?;
    Ok(ApiResponse::created(follow).message("User followed"))
}

/// DELETE /api/v1/users/{id}/follow
pub async fn unfollow_user(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    follows::unfollow_user(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Follow"))
}

/// GET /api/v1/users/{id}/followers
pub async fn user_followers(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vec<UserSummary>>> {
    Ok(ApiResponse::ok(follows::followers_of(&state.pool, id).await?))
}

/// GET /api/v1/users/{id}/following
pub async fn user_following(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vec<UserSummary>>> {
    Ok(ApiResponse::ok(follows::following_of(&state.pool, id).await?))
}

/// POST /api/v1/enterprises/{id}/follow
pub async fn follow_enterprise(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<EnterpriseFollow>> {
    let follow = follows::follow_enterprise(&state.pool, &auth, id).await?;
    Ok(ApiResponse::created(follow).message("Enterprise followed"))
}

/// DELETE /api/v1/enterprises/{id}/follow
pub async fn unfollow_enterprise(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    follows::unfollow_enterprise(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Follow"))
}

/// GET /api/v1/enterprises/{id}/followers
pub async fn enterprise_followers(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vec<UserSummary>>> {
    Ok(ApiResponse::ok(follows::followers_of_enterprise(&state.pool, id).await?))
}
