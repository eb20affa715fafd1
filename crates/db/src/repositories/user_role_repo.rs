//! Repository for the `user_roles` junction table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

/// Assigns and revokes roles, and resolves a user's role slugs.
pub struct UserRoleRepo;

impl UserRoleRepo {
    /// Role slugs held by a user, ordered by role ID (highest privilege first).
    pub async fn slugs_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT r.slug FROM user_roles ur
             JOIN roles r ON r.id = ur.role_id
             WHERE ur.user_id = $1
             ORDER BY r.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn has_role(pool: &PgPool, user_id: DbId, role_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM user_roles WHERE user_id = $1 AND role_id = $2)",
        )
        .bind(user_id)
        .bind(role_id)
        .fetch_one(pool)
        .await
    }

    /// Assign a role. Returns `false` if the user already held it.
    pub async fn assign(pool: &PgPool, user_id: DbId, role_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)
             ON CONFLICT (user_id, role_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(role_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke a role. Returns `false` if the user did not hold it.
    pub async fn revoke(pool: &PgPool, user_id: DbId, role_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_roles WHERE user_id = $1 AND role_id = $2")
            .bind(user_id)
            .bind(role_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
