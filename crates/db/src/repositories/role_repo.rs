//! Repository for the `roles` table.

use sqlx::PgPool;

use crate::models::role::Role;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, description, is_immutable, created_at, updated_at";

/// Provides read operations and the idempotent bootstrap insert for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Find a role by slug (case-sensitive).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE slug = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all roles ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY id ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Insert the role if its slug is not present yet, then return the stored row.
    ///
    /// An existing row is left untouched, so repeated calls are no-ops.
    pub async fn ensure(
        pool: &PgPool,
        slug: &str,
        title: &str,
        description: &str,
    ) -> Result<Role, sqlx::Error> {
        sqlx::query(
            "INSERT INTO roles (slug, title, description, is_immutable)
             VALUES ($1, $2, $3, true)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(slug)
        .bind(title)
        .bind(description)
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM roles WHERE slug = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(slug)
            .fetch_one(pool)
            .await
    }
}
