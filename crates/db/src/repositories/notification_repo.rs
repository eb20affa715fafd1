//! Repository for the `notifications` table.
//!
//! Fan-out inserts one row per recipient in a single `INSERT ... SELECT`;
//! the actor is always excluded from the recipients.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{NewNotification, Notification};

const COLUMNS: &str = "id, user_id, actor_user_id, kind, message, source_entity_type, \
                       source_entity_id, is_read, read_at, created_at";

pub struct NotificationRepo;

impl NotificationRepo {
    /// Notify a single user. Returns `None` when the recipient is the actor.
    pub async fn create_for_user(
        pool: &PgPool,
        user_id: DbId,
        input: &NewNotification,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications
                (user_id, actor_user_id, kind, message, source_entity_type, source_entity_id)
             SELECT $1, $2, $3, $4, $5, $6
             WHERE $2::BIGINT IS NULL OR $1 <> $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(input.actor_user_id)
            .bind(&input.kind)
            .bind(&input.message)
            .bind(&input.source_entity_type)
            .bind(input.source_entity_id)
            .fetch_optional(pool)
            .await
    }

    /// Notify every follower of `followed_id`. Returns the number of rows inserted.
    pub async fn fan_out_to_user_followers(
        pool: &PgPool,
        followed_id: DbId,
        input: &NewNotification,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO notifications
                (user_id, actor_user_id, kind, message, source_entity_type, source_entity_id)
             SELECT f.follower_id, $2, $3, $4, $5, $6
             FROM user_follows f
             WHERE f.followed_id = $1
               AND ($2::BIGINT IS NULL OR f.follower_id <> $2)",
        )
        .bind(followed_id)
        .bind(input.actor_user_id)
        .bind(&input.kind)
        .bind(&input.message)
        .bind(&input.source_entity_type)
        .bind(input.source_entity_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Notify every follower of an enterprise. Returns the number of rows inserted.
    pub async fn fan_out_to_enterprise_followers(
        pool: &PgPool,
        enterprise_id: DbId,
        input: &NewNotification,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO notifications
                (user_id, actor_user_id, kind, message, source_entity_type, source_entity_id)
             SELECT f.user_id, $2, $3, $4, $5, $6
             FROM enterprise_follows f
             WHERE f.enterprise_id = $1
               AND ($2::BIGINT IS NULL OR f.user_id <> $2)",
        )
        .bind(enterprise_id)
        .bind(input.actor_user_id)
        .bind(&input.kind)
        .bind(&input.message)
        .bind(&input.source_entity_type)
        .bind(input.source_entity_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Notifications for a user, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        unread_only: bool,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_id = $1 AND (NOT $2 OR is_read = false)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(unread_only)
            .fetch_all(pool)
            .await
    }

    /// Mark one of the user's notifications read. Already-read rows keep
    /// their original `read_at`.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications
             SET is_read = true, read_at = COALESCE(read_at, NOW())
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark every unread notification of the user read. Returns how many changed.
    pub async fn mark_all_read(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true, read_at = NOW()
             WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn unread_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
