//! Repository for the `saved_searches` table.
//!
//! Every lookup is scoped by owner: a search belonging to another user is
//! indistinguishable from a missing one.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::saved_search::{CreateSavedSearch, SavedSearch, UpdateSavedSearch};

const COLUMNS: &str = "id, user_id, name, query, filters, created_at, updated_at";

pub struct SavedSearchRepo;

impl SavedSearchRepo {
    pub async fn create(pool: &PgPool, input: &CreateSavedSearch) -> Result<SavedSearch, sqlx::Error> {
        let query = format!(
            "INSERT INTO saved_searches (user_id, name, query, filters)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedSearch>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.query)
            .bind(&input.filters)
            .fetch_one(pool)
            .await
    }

    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<SavedSearch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM saved_searches WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, SavedSearch>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<SavedSearch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM saved_searches WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SavedSearch>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Whether the user already has another search (not `exclude_id`) with this name.
    pub async fn exists_by_name(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM saved_searches
                WHERE user_id = $1 AND name = $2 AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(user_id)
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateSavedSearch,
    ) -> Result<Option<SavedSearch>, sqlx::Error> {
        let query = format!(
            "UPDATE saved_searches SET
                name = COALESCE($3, name),
                query = COALESCE($4, query),
                filters = COALESCE($5, filters)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedSearch>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.query)
            .bind(&input.filters)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM saved_searches WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
