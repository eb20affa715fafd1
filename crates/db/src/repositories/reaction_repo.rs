//! Repository for the `reactions` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::reaction::{Reaction, ReactionCount};

const COLUMNS: &str = "id, post_id, user_id, kind, created_at, updated_at";

pub struct ReactionRepo;

impl ReactionRepo {
    /// Set the user's reaction on a post, replacing any previous kind.
    pub async fn upsert(
        pool: &PgPool,
        post_id: DbId,
        user_id: DbId,
        kind: &str,
    ) -> Result<Reaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO reactions (post_id, user_id, kind)
             VALUES ($1, $2, $3)
             ON CONFLICT (post_id, user_id) DO UPDATE SET kind = EXCLUDED.kind
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reaction>(&query)
            .bind(post_id)
            .bind(user_id)
            .bind(kind)
            .fetch_one(pool)
            .await
    }

    /// Number of reactions per kind on a post.
    pub async fn counts(pool: &PgPool, post_id: DbId) -> Result<Vec<ReactionCount>, sqlx::Error> {
        sqlx::query_as::<_, ReactionCount>(
            "SELECT kind, COUNT(*) AS count FROM reactions
             WHERE post_id = $1
             GROUP BY kind
             ORDER BY kind ASC",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, post_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reactions WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
