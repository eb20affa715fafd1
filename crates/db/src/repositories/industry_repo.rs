//! Repository for the `industries` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::industry::{CreateIndustry, Industry, UpdateIndustry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, is_active, created_at, updated_at";

/// Provides CRUD operations for industries.
pub struct IndustryRepo;

impl IndustryRepo {
    /// Insert a new industry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateIndustry) -> Result<Industry, sqlx::Error> {
        let query = format!(
            "INSERT INTO industries (name, slug, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Industry>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Industry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM industries WHERE id = $1");
        sqlx::query_as::<_, Industry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List industries by name. Inactive rows are skipped unless requested.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Industry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM industries
             WHERE ($1 OR is_active)
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Industry>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Whether another industry (not `exclude_id`) already has this name or slug.
    pub async fn exists_by_name(
        pool: &PgPool,
        name: &str,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM industries
                WHERE (name = $1 OR slug = $2) AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(name)
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Update an industry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIndustry,
    ) -> Result<Option<Industry>, sqlx::Error> {
        let query = format!(
            "UPDATE industries SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Industry>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active`, returning the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Industry>, sqlx::Error> {
        let query = format!(
            "UPDATE industries SET is_active = NOT is_active
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Industry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an industry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM industries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
