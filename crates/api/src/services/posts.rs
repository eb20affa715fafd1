//! Posts with their media, reactions and favorites.

use jobboard_core::types::DbId;
use jobboard_core::validation::{
    ensure_media_type, ensure_reaction_kind, media_limit_reached, MAX_MEDIA_PER_POST,
};
use jobboard_db::models::favorite::FavoritePost;
use jobboard_db::models::media::{CreateMedia, Media};
use jobboard_db::models::post::{CreatePost, Post, UpdatePost};
use jobboard_db::models::reaction::{Reaction, ReactionCount};
use jobboard_db::repositories::{FavoriteRepo, MediaRepo, PostRepo, ReactionRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::services::accounts::find_user;
use crate::services::enterprises::{get_enterprise, owned_enterprise};
use crate::services::notifications;

#[derive(Debug, Clone)]
pub struct NewMedia {
    pub url: String,
    pub media_type: String,
    pub position: Option<i32>,
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Post>> {
    Ok(PostRepo::list(pool).await?)
}

pub async fn get_post(pool: &PgPool, id: DbId) -> AppResult<Post> {
    PostRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Post", id))
}

pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> AppResult<Vec<Post>> {
    find_user(pool, user_id).await?;
    Ok(PostRepo::list_by_user(pool, user_id).await?)
}

pub async fn list_by_enterprise(pool: &PgPool, enterprise_id: DbId) -> AppResult<Vec<Post>> {
    get_enterprise(pool, enterprise_id).await?;
    Ok(PostRepo::list_by_enterprise(pool, enterprise_id).await?)
}

async fn authored_post(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<Post> {
    let post = get_post(pool, id).await?;
    if post.user_id != actor.user_id {
        return Err(AppError::forbidden("You are not the author of this post"));
    }
    Ok(post)
}

/// Publish a post, optionally on behalf of an enterprise the caller owns,
/// then notify the relevant followers.
pub async fn create(
    pool: &PgPool,
    actor: &AuthUser,
    enterprise_id: Option<DbId>,
    content: String,
) -> AppResult<Post> {
    let enterprise = match enterprise_id {
        Some(id) => Some(owned_enterprise(pool, actor, id).await?),
        None => None,
    };

    let post = PostRepo::create(
        pool,
        &CreatePost {
            user_id: actor.user_id,
            enterprise_id,
            content,
        },
    )
    .await?;
    tracing::info!(post_id = post.id, user_id = actor.user_id, ?enterprise_id, "Post created");

    notifications::post_published(pool, actor, &post, enterprise.as_ref()).await;
    Ok(post)
}

pub async fn update(pool: &PgPool, actor: &AuthUser, id: DbId, input: UpdatePost) -> AppResult<Post> {
    authored_post(pool, actor, id).await?;
    PostRepo::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Post", id))
}

pub async fn delete(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<()> {
    authored_post(pool, actor, id).await?;
    if !PostRepo::delete(pool, id).await? {
        return Err(AppError::not_found("Post", id));
    }
    tracing::info!(post_id = id, "Post deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

pub async fn list_media(pool: &PgPool, post_id: DbId) -> AppResult<Vec<Media>> {
    get_post(pool, post_id).await?;
    Ok(MediaRepo::list_for_post(pool, post_id).await?)
}

/// Attach media to the caller's post, up to the per-post maximum.
pub async fn add_media(
    pool: &PgPool,
    actor: &AuthUser,
    post_id: DbId,
    input: NewMedia,
) -> AppResult<Media> {
    ensure_media_type(&input.media_type)?;
    authored_post(pool, actor, post_id).await?;

    let media = MediaRepo::create_capped(
        pool,
        &CreateMedia {
            post_id,
            url: input.url,
            media_type: input.media_type,
            position: input.position,
        },
        MAX_MEDIA_PER_POST,
    )
    .await?
    .ok_or_else(media_limit_reached)?;
    tracing::info!(media_id = media.id, post_id, "Media attached");
    Ok(media)
}

pub async fn delete_media(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<()> {
    let media = MediaRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Media", id))?;
    authored_post(pool, actor, media.post_id).await?;
    MediaRepo::delete(pool, id).await?;
    tracing::info!(media_id = id, post_id = media.post_id, "Media deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Reactions
// ---------------------------------------------------------------------------

pub async fn reaction_counts(pool: &PgPool, post_id: DbId) -> AppResult<Vec<ReactionCount>> {
    get_post(pool, post_id).await?;
    Ok(ReactionRepo::counts(pool, post_id).await?)
}

/// One reaction per user per post; reacting again replaces the kind.
pub async fn react(pool: &PgPool, actor: &AuthUser, post_id: DbId, kind: &str) -> AppResult<Reaction> {
    ensure_reaction_kind(kind)?;
    get_post(pool, post_id).await?;
    Ok(ReactionRepo::upsert(pool, post_id, actor.user_id, kind).await?)
}

pub async fn remove_reaction(pool: &PgPool, actor: &AuthUser, post_id: DbId) -> AppResult<()> {
    get_post(pool, post_id).await?;
    if !ReactionRepo::delete(pool, post_id, actor.user_id).await? {
        return Err(AppError::not_found("Reaction on post", post_id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

pub async fn favorite(pool: &PgPool, actor: &AuthUser, post_id: DbId) -> AppResult<FavoritePost> {
    get_post(pool, post_id).await?;
    Ok(FavoriteRepo::add_post(pool, actor.user_id, post_id).await?)
}

pub async fn unfavorite(pool: &PgPool, actor: &AuthUser, post_id: DbId) -> AppResult<()> {
    if !FavoriteRepo::remove_post(pool, actor.user_id, post_id).await? {
        return Err(AppError::not_found("Favorite post", post_id));
    }
    Ok(())
}

pub async fn favorites(pool: &PgPool, actor: &AuthUser) -> AppResult<Vec<Post>> {
    Ok(FavoriteRepo::list_posts(pool, actor.user_id).await?)
}
