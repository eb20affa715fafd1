//! Repositories for the `skills` catalog and its junctions
//! (`user_skills`, `vacancy_skills`).

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{
    CreateSkill, CreateUserSkill, Skill, UpdateSkill, UpdateUserSkill, UserSkill, VacancySkill,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, created_at, updated_at";

const USER_SKILL_COLUMNS: &str =
    "id, user_id, skill_id, level, years_experience, created_at, updated_at";

/// Provides CRUD operations for the skill catalog.
pub struct SkillRepo;

impl SkillRepo {
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, slug, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY name ASC");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Whether another skill (not `exclude_id`) already has this name or slug.
    pub async fn exists_by_name(
        pool: &PgPool,
        name: &str,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM skills
                WHERE (name = $1 OR slug = $2) AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(name)
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Skills a user lists on their profile.
pub struct UserSkillRepo;

impl UserSkillRepo {
    pub async fn create(pool: &PgPool, input: &CreateUserSkill) -> Result<UserSkill, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_skills (user_id, skill_id, level, years_experience)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_SKILL_COLUMNS}"
        );
        sqlx::query_as::<_, UserSkill>(&query)
            .bind(input.user_id)
            .bind(input.skill_id)
            .bind(&input.level)
            .bind(input.years_experience)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<UserSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {USER_SKILL_COLUMNS} FROM user_skills WHERE user_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, UserSkill>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, user_id: DbId, skill_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM user_skills WHERE user_id = $1 AND skill_id = $2)",
        )
        .bind(user_id)
        .bind(skill_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateUserSkill,
    ) -> Result<Option<UserSkill>, sqlx::Error> {
        let query = format!(
            "UPDATE user_skills SET
                level = COALESCE($3, level),
                years_experience = COALESCE($4, years_experience)
             WHERE id = $1 AND user_id = $2
             RETURNING {USER_SKILL_COLUMNS}"
        );
        sqlx::query_as::<_, UserSkill>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.level)
            .bind(input.years_experience)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_skills WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Skills a vacancy asks for.
pub struct VacancySkillRepo;

impl VacancySkillRepo {
    /// Attach a skill to a vacancy, or update `is_required` if already attached.
    pub async fn upsert(
        pool: &PgPool,
        vacancy_id: DbId,
        skill_id: DbId,
        is_required: bool,
    ) -> Result<VacancySkill, sqlx::Error> {
        sqlx::query_as::<_, VacancySkill>(
            "WITH upserted AS (
                INSERT INTO vacancy_skills (vacancy_id, skill_id, is_required)
                VALUES ($1, $2, $3)
                ON CONFLICT (vacancy_id, skill_id) DO UPDATE SET is_required = EXCLUDED.is_required
                RETURNING vacancy_id, skill_id, is_required, created_at
             )
             SELECT u.vacancy_id, u.skill_id, s.name, s.slug, u.is_required, u.created_at
             FROM upserted u
             JOIN skills s ON s.id = u.skill_id",
        )
        .bind(vacancy_id)
        .bind(skill_id)
        .bind(is_required)
        .fetch_one(pool)
        .await
    }

    pub async fn list_for_vacancy(
        pool: &PgPool,
        vacancy_id: DbId,
    ) -> Result<Vec<VacancySkill>, sqlx::Error> {
        sqlx::query_as::<_, VacancySkill>(
            "SELECT vs.vacancy_id, vs.skill_id, s.name, s.slug, vs.is_required, vs.created_at
             FROM vacancy_skills vs
             JOIN skills s ON s.id = vs.skill_id
             WHERE vs.vacancy_id = $1
             ORDER BY vs.is_required DESC, s.name ASC",
        )
        .bind(vacancy_id)
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, vacancy_id: DbId, skill_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM vacancy_skills WHERE vacancy_id = $1 AND skill_id = $2")
                .bind(vacancy_id)
                .bind(skill_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
