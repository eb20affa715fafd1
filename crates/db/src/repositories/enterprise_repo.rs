//! Repository for the `enterprises` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::enterprise::{CreateEnterprise, Enterprise, UpdateEnterprise};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, industry_id, name, slug, description, website, email, \
                       phone, logo_url, created_at, updated_at";

/// Provides CRUD operations for enterprises.
pub struct EnterpriseRepo;

impl EnterpriseRepo {
    /// Insert a new enterprise, returning the created row. When `owner_role_id`
    /// is given the owner is granted that role in the same transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnterprise,
        owner_role_id: Option<DbId>,
    ) -> Result<Enterprise, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO enterprises
                (user_id, industry_id, name, slug, description, website, email, phone, logo_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let enterprise = sqlx::query_as::<_, Enterprise>(&query)
            .bind(input.user_id)
            .bind(input.industry_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.website)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.logo_url)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(role_id) = owner_role_id {
            sqlx::query(
                "INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)
                 ON CONFLICT (user_id, role_id) DO NOTHING",
            )
            .bind(input.user_id)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(enterprise)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enterprise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enterprises WHERE id = $1");
        sqlx::query_as::<_, Enterprise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The enterprise owned by a user, if any.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Enterprise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enterprises WHERE user_id = $1");
        sqlx::query_as::<_, Enterprise>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Enterprise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enterprises ORDER BY name ASC");
        sqlx::query_as::<_, Enterprise>(&query).fetch_all(pool).await
    }

    /// Whether another enterprise (not `exclude_id`) already has this name or slug.
    pub async fn exists_by_name(
        pool: &PgPool,
        name: &str,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM enterprises
                WHERE (name = $1 OR slug = $2) AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(name)
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Update an enterprise. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEnterprise,
    ) -> Result<Option<Enterprise>, sqlx::Error> {
        let query = format!(
            "UPDATE enterprises SET
                industry_id = COALESCE($2, industry_id),
                name = COALESCE($3, name),
                slug = COALESCE($4, slug),
                description = COALESCE($5, description),
                website = COALESCE($6, website),
                email = COALESCE($7, email),
                phone = COALESCE($8, phone),
                logo_url = COALESCE($9, logo_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enterprise>(&query)
            .bind(id)
            .bind(input.industry_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.website)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.logo_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enterprises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
