//! Repository for `user_follows` and `enterprise_follows`.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::follow::{EnterpriseFollow, UserFollow};
use crate::models::user::UserSummary;

pub struct FollowRepo;

impl FollowRepo {
    // -- users --------------------------------------------------------------

    /// Record that `follower_id` follows `followed_id`.
    ///
    /// Fails with a primary-key violation when the follow already exists.
    pub async fn follow_user(
        pool: &PgPool,
        follower_id: DbId,
        followed_id: DbId,
    ) -> Result<UserFollow, sqlx::Error> {
        sqlx::query_as::<_, UserFollow>(
            "INSERT INTO user_follows (follower_id, followed_id)
             VALUES ($1, $2)
             RETURNING follower_id, followed_id, created_at",
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_one(pool)
        .await
    }

    pub async fn unfollow_user(
        pool: &PgPool,
        follower_id: DbId,
        followed_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM user_follows WHERE follower_id = $1 AND followed_id = $2")
                .bind(follower_id)
                .bind(followed_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn is_following_user(
        pool: &PgPool,
        follower_id: DbId,
        followed_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM user_follows WHERE follower_id = $1 AND followed_id = $2
             )",
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_one(pool)
        .await
    }

    /// Users following `user_id`, most recent first.
    pub async fn list_user_followers(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.name, u.avatar_url
             FROM user_follows f
             JOIN users u ON u.id = f.follower_id
             WHERE f.followed_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Users that `user_id` follows, most recent first.
    pub async fn list_user_following(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.name, u.avatar_url
             FROM user_follows f
             JOIN users u ON u.id = f.followed_id
             WHERE f.follower_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    // -- enterprises --------------------------------------------------------

    pub async fn follow_enterprise(
        pool: &PgPool,
        user_id: DbId,
        enterprise_id: DbId,
    ) -> Result<EnterpriseFollow, sqlx::Error> {
        sqlx::query_as::<_, EnterpriseFollow>(
            "INSERT INTO enterprise_follows (user_id, enterprise_id)
             VALUES ($1, $2)
             RETURNING user_id, enterprise_id, created_at",
        )
        .bind(user_id)
        .bind(enterprise_id)
        .fetch_one(pool)
        .await
    }

    pub async fn unfollow_enterprise(
        pool: &PgPool,
        user_id: DbId,
        enterprise_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM enterprise_follows WHERE user_id = $1 AND enterprise_id = $2",
        )
        .bind(user_id)
        .bind(enterprise_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn is_following_enterprise(
        pool: &PgPool,
        user_id: DbId,
        enterprise_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM enterprise_follows WHERE user_id = $1 AND enterprise_id = $2
             )",
        )
        .bind(user_id)
        .bind(enterprise_id)
        .fetch_one(pool)
        .await
    }

    pub async fn list_enterprise_followers(
        pool: &PgPool,
        enterprise_id: DbId,
    ) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.name, u.avatar_url
             FROM enterprise_follows f
             JOIN users u ON u.id = f.user_id
             WHERE f.enterprise_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(enterprise_id)
        .fetch_all(pool)
        .await
    }
}
