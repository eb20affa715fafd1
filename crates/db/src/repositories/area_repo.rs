//! Repository for the `areas` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::area::{CreateArea, Area, UpdateArea};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, is_active, created_at, updated_at";

/// Provides CRUD operations for areas.
pub struct AreaRepo;

impl AreaRepo {
    /// Insert a new area, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArea) -> Result<Area, sqlx::Error> {
        let query = format!(
            "INSERT INTO areas (name, slug, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Area>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM areas WHERE id = $1");
        sqlx::query_as::<_, Area>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List areas by name. Inactive rows are skipped unless requested.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Area>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM areas
             WHERE ($1 OR is_active)
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Whether another area (not `exclude_id`) already has this name or slug.
    pub async fn exists_by_name(
        pool: &PgPool,
        name: &str,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM areas
                WHERE (name = $1 OR slug = $2) AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(name)
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Update an area. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArea,
    ) -> Result<Option<Area>, sqlx::Error> {
        let query = format!(
            "UPDATE areas SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active`, returning the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Area>, sqlx::Error> {
        let query = format!(
            "UPDATE areas SET is_active = NOT is_active
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an area. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM areas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
