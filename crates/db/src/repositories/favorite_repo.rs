//! Repository for the `favorite_posts` and `favorite_vacancies` junctions.
//!
//! Adding an existing favorite is a no-op; the original row is returned.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::{FavoritePost, FavoriteVacancy};
use crate::models::post::Post;
use crate::models::vacancy::Vacancy;

pub struct FavoriteRepo;

impl FavoriteRepo {
    pub async fn add_post(
        pool: &PgPool,
        user_id: DbId,
        post_id: DbId,
    ) -> Result<FavoritePost, sqlx::Error> {
        sqlx::query_as::<_, FavoritePost>(
            "INSERT INTO favorite_posts (user_id, post_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, post_id) DO UPDATE SET created_at = favorite_posts.created_at
             RETURNING user_id, post_id, created_at",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(pool)
        .await
    }

    pub async fn remove_post(pool: &PgPool, user_id: DbId, post_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorite_posts WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Posts the user marked as favorite, most recently favorited first.
    pub async fn list_posts(pool: &PgPool, user_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT p.id, p.user_id, p.enterprise_id, p.content, p.created_at, p.updated_at
             FROM favorite_posts f
             JOIN posts p ON p.id = f.post_id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn add_vacancy(
        pool: &PgPool,
        user_id: DbId,
        vacancy_id: DbId,
    ) -> Result<FavoriteVacancy, sqlx::Error> {
        sqlx::query_as::<_, FavoriteVacancy>(
            "INSERT INTO favorite_vacancies (user_id, vacancy_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, vacancy_id)
                DO UPDATE SET created_at = favorite_vacancies.created_at
             RETURNING user_id, vacancy_id, created_at",
        )
        .bind(user_id)
        .bind(vacancy_id)
        .fetch_one(pool)
        .await
    }

    pub async fn remove_vacancy(
        pool: &PgPool,
        user_id: DbId,
        vacancy_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM favorite_vacancies WHERE user_id = $1 AND vacancy_id = $2")
                .bind(user_id)
                .bind(vacancy_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_vacancies(pool: &PgPool, user_id: DbId) -> Result<Vec<Vacancy>, sqlx::Error> {
        sqlx::query_as::<_, Vacancy>(
            "SELECT v.id, v.enterprise_id, v.area_id, v.category_id, v.title, v.description,
                    v.employment_type, v.work_model, v.salary_min, v.salary_max, v.is_open,
                    v.created_at, v.updated_at
             FROM favorite_vacancies f
             JOIN vacancies v ON v.id = f.vacancy_id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
