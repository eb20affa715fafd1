//! Repository for the `employees` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee};

const COLUMNS: &str = "id, enterprise_id, user_id, position, started_at, created_at, updated_at";

pub struct EmployeeRepo;

impl EmployeeRepo {
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (enterprise_id, user_id, position, started_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(input.enterprise_id)
            .bind(input.user_id)
            .bind(&input.position)
            .bind(input.started_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_enterprise(
        pool: &PgPool,
        enterprise_id: DbId,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees WHERE enterprise_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(enterprise_id)
            .fetch_all(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, enterprise_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE enterprise_id = $1 AND user_id = $2)",
        )
        .bind(enterprise_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
