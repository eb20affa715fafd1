//! Vacancies published by enterprises, their required skills and favorites.

use jobboard_core::types::DbId;
use jobboard_core::validation::ensure_salary_range;
use jobboard_db::models::enterprise::Enterprise;
use jobboard_db::models::favorite::FavoriteVacancy;
use jobboard_db::models::skill::VacancySkill;
use jobboard_db::models::vacancy::{CreateVacancy, UpdateVacancy, Vacancy};
use jobboard_db::repositories::{FavoriteRepo, VacancyRepo, VacancySkillRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::services::catalog::{get_area, get_category, get_skill};
use crate::services::enterprises::{get_enterprise, owned_enterprise};
use crate::services::notifications;

#[derive(Debug, Clone)]
pub struct NewVacancy {
    pub area_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub employment_type: Option<String>,
    pub work_model: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
}

pub async fn list(pool: &PgPool, include_closed: bool) -> AppResult<Vec<Vacancy>> {
    Ok(VacancyRepo::list(pool, include_closed).await?)
}

pub async fn get_vacancy(pool: &PgPool, id: DbId) -> AppResult<Vacancy> {
    VacancyRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Vacancy", id))
}

pub async fn list_by_enterprise(pool: &PgPool, enterprise_id: DbId) -> AppResult<Vec<Vacancy>> {
    get_enterprise(pool, enterprise_id).await?;
    Ok(VacancyRepo::list_by_enterprise(pool, enterprise_id).await?)
}

/// Load a vacancy together with its enterprise, requiring the caller to own it.
async fn owned_vacancy(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<(Vacancy, Enterprise)> {
    let vacancy = get_vacancy(pool, id).await?;
    let enterprise = owned_enterprise(pool, actor, vacancy.enterprise_id).await?;
    Ok((vacancy, enterprise))
}

/// Area and category must exist, and a category must sit under the given area.
async fn ensure_classification(
    pool: &PgPool,
    area_id: Option<DbId>,
    category_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(area_id) = area_id {
        get_area(pool, area_id).await?;
    }
    if let Some(category_id) = category_id {
        let category = get_category(pool, category_id).await?;
        if let Some(area_id) = area_id.filter(|&id| id != category.area_id) {
            return Err(AppError::validation(format!(
                "Category {category_id} does not belong to area {area_id}"
            )));
        }
    }
    Ok(())
}

/// Open a vacancy on the caller's enterprise and notify its followers.
pub async fn create(
    pool: &PgPool,
    actor: &AuthUser,
    enterprise_id: DbId,
    input: NewVacancy,
) -> AppResult<Vacancy> {
    ensure_salary_range(input.salary_min, input.salary_max)?;
    let enterprise = owned_enterprise(pool, actor, enterprise_id).await?;
    ensure_classification(pool, input.area_id, input.category_id).await?;

    let vacancy = VacancyRepo::create(
        pool,
        &CreateVacancy {
            enterprise_id,
            area_id: input.area_id,
            category_id: input.category_id,
            title: input.title.trim().to_string(),
            description: input.description,
            employment_type: input.employment_type,
            work_model: input.work_model,
            salary_min: input.salary_min,
            salary_max: input.salary_max,
        },
    )
    .await?;
    tracing::info!(vacancy_id = vacancy.id, enterprise_id, "Vacancy created");

    notifications::vacancy_opened(pool, actor, &enterprise, &vacancy).await;
    Ok(vacancy)
}

/// Owner-only partial update. The salary range is checked against the
/// merged old and new bounds.
pub async fn update(
    pool: &PgPool,
    actor: &AuthUser,
    id: DbId,
    input: UpdateVacancy,
) -> AppResult<Vacancy> {
    let (current, _) = owned_vacancy(pool, actor, id).await?;
    ensure_salary_range(
        input.salary_min.or(current.salary_min),
        input.salary_max.or(current.salary_max),
    )?;
    ensure_classification(
        pool,
        input.area_id.or(current.area_id),
        input.category_id.or(current.category_id),
    )
    .await?;

    VacancyRepo::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Vacancy", id))
}

pub async fn delete(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<()> {
    owned_vacancy(pool, actor, id).await?;
    if !VacancyRepo::delete(pool, id).await? {
        return Err(AppError::not_found("Vacancy", id));
    }
    tracing::info!(vacancy_id = id, "Vacancy deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

pub async fn list_skills(pool: &PgPool, vacancy_id: DbId) -> AppResult<Vec<VacancySkill>> {
    get_vacancy(pool, vacancy_id).await?;
    Ok(VacancySkillRepo::list_for_vacancy(pool, vacancy_id).await?)
}

pub async fn put_skill(
    pool: &PgPool,
    actor: &AuthUser,
    vacancy_id: DbId,
    skill_id: DbId,
    is_required: bool,
) -> AppResult<VacancySkill> {
    owned_vacancy(pool, actor, vacancy_id).await?;
    get_skill(pool, skill_id).await?;
    Ok(VacancySkillRepo::upsert(pool, vacancy_id, skill_id, is_required).await?)
}

pub async fn remove_skill(
    pool: &PgPool,
    actor: &AuthUser,
    vacancy_id: DbId,
    skill_id: DbId,
) -> AppResult<()> {
    owned_vacancy(pool, actor, vacancy_id).await?;
    if !VacancySkillRepo::delete(pool, vacancy_id, skill_id).await? {
        return Err(AppError::not_found("Skill on vacancy", skill_id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

pub async fn favorite(pool: &PgPool, actor: &AuthUser, vacancy_id: DbId) -> AppResult<FavoriteVacancy> {
    get_vacancy(pool, vacancy_id).await?;
    Ok(FavoriteRepo::add_vacancy(pool, actor.user_id, vacancy_id).await?)
}

pub async fn unfavorite(pool: &PgPool, actor: &AuthUser, vacancy_id: DbId) -> AppResult<()> {
    if !FavoriteRepo::remove_vacancy(pool, actor.user_id, vacancy_id).await? {
        return Err(AppError::not_found("Favorite vacancy", vacancy_id));
    }
    Ok(())
}

pub async fn favorites(pool: &PgPool, actor: &AuthUser) -> AppResult<Vec<Vacancy>> {
    Ok(FavoriteRepo::list_vacancies(pool, actor.user_id).await?)
}
