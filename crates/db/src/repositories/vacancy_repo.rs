//! Repository for the `vacancies` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::vacancy::{CreateVacancy, UpdateVacancy, Vacancy};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, enterprise_id, area_id, category_id, title, description, \
                       employment_type, work_model, salary_min, salary_max, is_open, \
                       created_at, updated_at";

/// Provides CRUD operations for vacancies.
pub struct VacancyRepo;

impl VacancyRepo {
    pub async fn create(pool: &PgPool, input: &CreateVacancy) -> Result<Vacancy, sqlx::Error> {
        let query = format!(
            "INSERT INTO vacancies
                (enterprise_id, area_id, category_id, title, description,
                 employment_type, work_model, salary_min, salary_max)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(input.enterprise_id)
            .bind(input.area_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.employment_type)
            .bind(&input.work_model)
            .bind(input.salary_min)
            .bind(input.salary_max)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vacancy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vacancies WHERE id = $1");
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All vacancies, newest first. Closed ones only when `include_closed`.
    pub async fn list(pool: &PgPool, include_closed: bool) -> Result<Vec<Vacancy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vacancies
             WHERE ($1 OR is_open)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(include_closed)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_enterprise(
        pool: &PgPool,
        enterprise_id: DbId,
    ) -> Result<Vec<Vacancy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vacancies
             WHERE enterprise_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(enterprise_id)
            .fetch_all(pool)
            .await
    }

    /// Update a vacancy. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVacancy,
    ) -> Result<Option<Vacancy>, sqlx::Error> {
        let query = format!(
            "UPDATE vacancies SET
                area_id = COALESCE($2, area_id),
                category_id = COALESCE($3, category_id),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                employment_type = COALESCE($6, employment_type),
                work_model = COALESCE($7, work_model),
                salary_min = COALESCE($8, salary_min),
                salary_max = COALESCE($9, salary_max),
                is_open = COALESCE($10, is_open)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(id)
            .bind(input.area_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.employment_type)
            .bind(&input.work_model)
            .bind(input.salary_min)
            .bind(input.salary_max)
            .bind(input.is_open)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
