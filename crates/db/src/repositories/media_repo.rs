//! Repository for the `media` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMedia, Media};

const COLUMNS: &str = "id, post_id, url, media_type, position, created_at, updated_at";

pub struct MediaRepo;

impl MediaRepo {
    /// Attach a media item unless the post already holds `limit` items.
    /// Without an explicit position it is appended after the last existing item.
    ///
    /// The post row is locked for the duration of the transaction, so
    /// concurrent inserts on the same post are serialized. Returns `None`
    /// when the limit is reached.
    pub async fn create_capped(
        pool: &PgPool,
        input: &CreateMedia,
        limit: i64,
    ) -> Result<Option<Media>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(input.post_id)
            .execute(&mut *tx)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM media WHERE post_id = $1")
            .bind(input.post_id)
            .fetch_one(&mut *tx)
            .await?;
        if count >= limit {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO media (post_id, url, media_type, position)
             VALUES ($1, $2, $3, COALESCE($4,
                (SELECT COALESCE(MAX(position) + 1, 0) FROM media WHERE post_id = $1)))
             RETURNING {COLUMNS}"
        );
        let media = sqlx::query_as::<_, Media>(&query)
            .bind(input.post_id)
            .bind(&input.url)
            .bind(&input.media_type)
            .bind(input.position)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(media))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_post(pool: &PgPool, post_id: DbId) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media WHERE post_id = $1 ORDER BY position ASC, id ASC"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
