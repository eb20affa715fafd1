//! Repository for the `curriculums` table (one row per user).

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::curriculum::{CreateCurriculum, Curriculum, UpdateCurriculum};

const COLUMNS: &str = "id, user_id, headline, summary, phone, linkedin_url, portfolio_url, \
                       created_at, updated_at";

pub struct CurriculumRepo;

impl CurriculumRepo {
    pub async fn create(pool: &PgPool, input: &CreateCurriculum) -> Result<Curriculum, sqlx::Error> {
        let query = format!(
            "INSERT INTO curriculums (user_id, headline, summary, phone, linkedin_url, portfolio_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(input.user_id)
            .bind(&input.headline)
            .bind(&input.summary)
            .bind(&input.phone)
            .bind(&input.linkedin_url)
            .bind(&input.portfolio_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Curriculum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM curriculums WHERE user_id = $1");
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_for_user(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateCurriculum,
    ) -> Result<Option<Curriculum>, sqlx::Error> {
        let query = format!(
            "UPDATE curriculums SET
                headline = COALESCE($2, headline),
                summary = COALESCE($3, summary),
                phone = COALESCE($4, phone),
                linkedin_url = COALESCE($5, linkedin_url),
                portfolio_url = COALESCE($6, portfolio_url)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(user_id)
            .bind(&input.headline)
            .bind(&input.summary)
            .bind(&input.phone)
            .bind(&input.linkedin_url)
            .bind(&input.portfolio_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_for_user(pool: &PgPool, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM curriculums WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
