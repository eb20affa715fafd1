//! Following users and enterprises.

use jobboard_core::types::DbId;
use jobboard_db::models::follow::{EnterpriseFollow, UserFollow};
use jobboard_db::models::user::UserSummary;
use jobboard_db::repositories::FollowRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::services::accounts::find_user;
use crate::services::enterprises::get_enterprise;
use crate::services::notifications;

pub async fn follow_user(pool: &PgPool, actor: &AuthUser, user_id: DbId) -> AppResult<UserFollow> {
    if actor.user_id == user_id {
        return Err(AppError::validation("You cannot follow yourself"));
    }
    find_user(pool, user_id).await?;
    if FollowRepo::is_following_user(pool, actor.user_id, user_id).await? {
        return Err(AppError::conflict("You already follow this user"));
    }

    let follow = FollowRepo::follow_user(pool, actor.user_id, user_id).await?;
    tracing::info!(follower_id = actor.user_id, followed_id = user_id, "User followed");
    notifications::user_followed(pool, actor, user_id).await;
    Ok(follow)
}

pub async fn unfollow_user(pool: &PgPool, actor: &AuthUser, user_id: DbId) -> AppResult<()> {
    find_user(pool, user_id).await?;
    if !FollowRepo::unfollow_user(pool, actor.user_id, user_id).await? {
        return Err(AppError::not_found("Follow of user", user_id));
    }
    tracing::info!(follower_id = actor.user_id, followed_id = user_id, "User unfollowed");
    Ok(())
}

pub async fn followers_of(pool: &PgPool, user_id: DbId) -> AppResult<Vec<UserSummary>> {
    find_user(pool, user_id).await?;
    Ok(FollowRepo::list_user_followers(pool, user_id).await?)
}

pub async fn following_of(pool: &PgPool, user_id: DbId) -> AppResult<Vec<UserSummary>> {
    find_user(pool, user_id).await?;
    Ok(FollowRepo::list_user_following(pool, user_id).await?)
}

pub async fn follow_enterprise(
    pool: &PgPool,
    actor: &AuthUser,
    enterprise_id: DbId,
) -> AppResult<EnterpriseFollow> {
    let enterprise = get_enterprise(pool, enterprise_id).await?;
    if enterprise.user_id == actor.user_id {
        return Err(AppError::validation("You cannot follow your own enterprise"));
    }
    if FollowRepo::is_following_enterprise(pool, actor.user_id, enterprise_id).await? {
        return Err(AppError::conflict("You already follow this enterprise"));
    }

    let follow = FollowRepo::follow_enterprise(pool, actor.user_id, enterprise_id).await?;
    tracing::info!(user_id = actor.user_id, enterprise_id, "Enterprise followed");
    notifications::enterprise_followed(pool, actor, &enterprise).await;
    Ok(follow)
}

pub async fn unfollow_enterprise(
    pool: &PgPool,
    actor: &AuthUser,
    enterprise_id: DbId,
) -> AppResult<()> {
    get_enterprise(pool, enterprise_id).await?;
    if !FollowRepo::unfollow_enterprise(pool, actor.user_id, enterprise_id).await? {
        return Err(AppError::not_found("Follow of enterprise", enterprise_id));
    }
    tracing::info!(user_id = actor.user_id, enterprise_id, "Enterprise unfollowed");
    Ok(())
}

pub async fn followers_of_enterprise(
    pool: &PgPool,
    enterprise_id: DbId,
) -> AppResult<Vec<UserSummary>> {
    get_enterprise(pool, enterprise_id).await?;
    Ok(FollowRepo::list_enterprise_followers(pool, enterprise_id).await?)
}
