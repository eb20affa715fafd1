//! Handlers for `/posts`, their media, reactions and favorites.

use axum::extract::State;
use jobboard_core::types::DbId;
use jobboard_db::models::favorite::FavoritePost;
use jobboard_db::models::media::Media;
use jobboard_db::models::post::{Post, UpdatePost};
use jobboard_db::models::reaction::{Reaction, ReactionCount};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::posts::{self, NewMedia};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /posts`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Publish on behalf of this enterprise; the caller must own it.
    pub enterprise_id: Option<DbId>,
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
}

/// Request body for `PATCH /posts/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 10000))]
    pub content: Option<String>,
}

/// Request body for `POST /posts/{id}/media`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMediaRequest {
    #[validate(url)]
    pub url: String,
    pub media_type: String,
    #[validate(range(min = 0))]
    pub position: Option<i32>,
}

/// Request body for `PUT /posts/{id}/reactions`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReactionRequest {
    #[validate(length(min = 1))]
    pub kind: String,
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// GET /api/v1/posts
pub async fn list_posts(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Post>>> {
    Ok(ApiResponse::ok(posts::list(&state.pool).await?))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Post>> {
    Ok(ApiResponse::ok(posts::get_post(&state.pool, id).await?))
}

/// GET /api/v1/users/{id}/posts
pub async fn list_user_posts(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> AppResult<ApiResponse<Vec<Post>>> {
    Ok(ApiResponse::ok(posts::list_by_user(&state.pool, user_id).await?))
}

/// GET /api/v1/enterprises/{id}/posts
pub async fn list_enterprise_posts(
    State(state): State<AppState>,
    IdPath(enterprise_id): IdPath,
) -> AppResult<ApiResponse<Vec<Post>>> {
    Ok(ApiResponse::ok(posts::list_by_enterprise(&state.pool, enterprise_id).await?))
}

/// POST /api/v1/posts
pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreatePostRequest>,
) -> AppResult<ApiResponse<Post>> {
    let enterprise_id = input
        .enterprise_id
        .map(|id| jobboard_core::validation::ensure_valid_id("Enterprise", id))
        .transpose()?;
    let post = posts::create(&state.pool, &auth, enterprise_id, input.content).await?;
    Ok(ApiResponse::created(post))
}

/// PATCH /api/v1/posts/{id}
pub async fn update_post(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdatePostRequest>,
) -> AppResult<ApiResponse<Post>> {
    let post = posts::update(&state.pool, &auth, id, UpdatePost { content: input.content }).await?;
    Ok(ApiResponse::ok(post).message("Post updated"))
}

/// DELETE /api/v1/posts/{id}
///
/// Only the author may delete a post; anyone else gets a 403.
pub async fn delete_post(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    posts::delete(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Post"))
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// GET /api/v1/posts/{id}/media
pub async fn list_media(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vec<Media>>> {
    Ok(ApiResponse::ok(posts::list_media(&state.pool, id).await?))
}

/// POST /api/v1/posts/{id}/media
///
/// A post holds at most ten media items; the eleventh is a 409.
pub async fn add_media(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<CreateMediaRequest>,
) -> AppResult<ApiResponse<Media>> {
    let media = posts::add_media(
        &state.pool,
        &auth,
        id,
        NewMedia {
            url: input.url,
            media_type: input.media_type,
            position: input.position,
        },
    )
    .await?;
    Ok(ApiResponse::created(media))
}

/// DELETE /api/v1/media/{id}
pub async fn delete_media(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    posts::delete_media(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Media"))
}

// ---------------------------------------------------------------------------
// Reactions
// ---------------------------------------------------------------------------

/// GET /api/v1/posts/{id}/reactions
pub async fn reaction_counts(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vec<ReactionCount>>> {
    Ok(ApiResponse::ok(posts::reaction_counts(&state.pool, id).await?))
}

/// PUT /api/v1/posts/{id}/reactions
pub async fn react(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<ReactionRequest>,
) -> AppResult<ApiResponse<Reaction>> {
    let reaction = posts::react(&state.pool, &auth, id, &input.kind).await?;
    Ok(ApiResponse::ok(reaction).message("Reaction saved"))
}

/// DELETE /api/v1/posts/{id}/reactions
pub async fn remove_reaction(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    posts::remove_reaction(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Reaction"))
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// POST /api/v1/posts/{id}/favorite
pub async fn favorite_post(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<FavoritePost>> {
    let favorite = posts::favorite(&state.pool, &auth, id).await?;
    Ok(ApiResponse::ok(favorite).message("Post added to favorites"))
}

/// DELETE /api/v1/posts/{id}/favorite
pub async fn unfavorite_post(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    posts::unfavorite(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Favorite"))
}

/// GET /api/v1/favorites/posts
pub async fn favorite_posts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Post>>> {
    Ok(ApiResponse::ok(posts::favorites(&state.pool, &auth).await?))
}
