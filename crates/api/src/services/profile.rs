//! Caller-scoped resources: my skills, curriculum and saved searches.
//!
//! Every lookup is keyed by `(id, user_id)`, so another user's row is
//! reported as missing rather than forbidden.

use jobboard_core::types::DbId;
use jobboard_core::validation::ensure_skill_level;
use jobboard_db::models::curriculum::{CreateCurriculum, Curriculum, UpdateCurriculum};
use jobboard_db::models::saved_search::{CreateSavedSearch, SavedSearch, UpdateSavedSearch};
use jobboard_db::models::skill::{CreateUserSkill, UpdateUserSkill, UserSkill};
use jobboard_db::repositories::{CurriculumRepo, SavedSearchRepo, UserSkillRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::services::accounts::find_user;
use crate::services::catalog::get_skill;

// ---------------------------------------------------------------------------
// My skills
// ---------------------------------------------------------------------------

pub async fn list_skills(pool: &PgPool, actor: &AuthUser) -> AppResult<Vec<UserSkill>> {
    Ok(UserSkillRepo::list_for_user(pool, actor.user_id).await?)
}

pub async fn add_skill(
    pool: &PgPool,
    actor: &AuthUser,
    skill_id: DbId,
    level: String,
    years_experience: Option<i32>,
) -> AppResult<UserSkill> {
    ensure_skill_level(&level)?;
    get_skill(pool, skill_id).await?;
    if UserSkillRepo::exists(pool, actor.user_id, skill_id).await? {
        return Err(AppError::conflict("Skill is already on your profile"));
    }
    let skill = UserSkillRepo::create(
        pool,
        &CreateUserSkill {
            user_id: actor.user_id,
            skill_id,
            level,
            years_experience,
        },
    )
    .await?;
    tracing::info!(user_skill_id = skill.id, user_id = actor.user_id, skill_id, "Skill added to profile");
    Ok(skill)
}

pub async fn update_skill(
    pool: &PgPool,
    actor: &AuthUser,
    id: DbId,
    input: UpdateUserSkill,
) -> AppResult<UserSkill> {
    if let Some(level) = input.level.as_deref() {
        ensure_skill_level(level)?;
    }
    UserSkillRepo::update(pool, id, actor.user_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("User skill", id))
}

pub async fn remove_skill(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<()> {
    if !UserSkillRepo::delete(pool, id, actor.user_id).await? {
        return Err(AppError::not_found("User skill", id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Curriculum
// ---------------------------------------------------------------------------

pub async fn create_curriculum(
    pool: &PgPool,
    actor: &AuthUser,
    mut input: CreateCurriculum,
) -> AppResult<Curriculum> {
    if CurriculumRepo::find_by_user(pool, actor.user_id).await?.is_some() {
        return Err(AppError::conflict("You already have a curriculum"));
    }
    input.user_id = actor.user_id;
    let curriculum = CurriculumRepo::create(pool, &input).await?;
    tracing::info!(curriculum_id = curriculum.id, user_id = actor.user_id, "Curriculum created");
    Ok(curriculum)
}

pub async fn my_curriculum(pool: &PgPool, actor: &AuthUser) -> AppResult<Curriculum> {
    CurriculumRepo::find_by_user(pool, actor.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum of user", actor.user_id))
}

pub async fn update_curriculum(
    pool: &PgPool,
    actor: &AuthUser,
    input: UpdateCurriculum,
) -> AppResult<Curriculum> {
    CurriculumRepo::update_for_user(pool, actor.user_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum of user", actor.user_id))
}

pub async fn delete_curriculum(pool: &PgPool, actor: &AuthUser) -> AppResult<()> {
    if !CurriculumRepo::delete_for_user(pool, actor.user_id).await? {
        return Err(AppError::not_found("Curriculum of user", actor.user_id));
    }
    tracing::info!(user_id = actor.user_id, "Curriculum deleted");
    Ok(())
}

/// Public view of another user's curriculum.
pub async fn curriculum_of(pool: &PgPool, user_id: DbId) -> AppResult<Curriculum> {
    find_user(pool, user_id).await?;
    CurriculumRepo::find_by_user(pool, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum of user", user_id))
}

// ---------------------------------------------------------------------------
// Saved searches
// ---------------------------------------------------------------------------

pub async fn list_searches(pool: &PgPool, actor: &AuthUser) -> AppResult<Vec<SavedSearch>> {
    Ok(SavedSearchRepo::list_for_user(pool, actor.user_id).await?)
}

pub async fn get_search(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<SavedSearch> {
    SavedSearchRepo::find_for_user(pool, id, actor.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Saved search", id))
}

async fn ensure_search_name_free(
    pool: &PgPool,
    user_id: DbId,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if SavedSearchRepo::exists_by_name(pool, user_id, name, exclude_id).await? {
        return Err(AppError::conflict(format!(
            "You already have a saved search named '{name}'"
        )));
    }
    Ok(())
}

pub async fn create_search(
    pool: &PgPool,
    actor: &AuthUser,
    name: String,
    query: String,
    filters: serde_json::Value,
) -> AppResult<SavedSearch> {
    let name = name.trim().to_string();
    ensure_search_name_free(pool, actor.user_id, &name, None).await?;
    let search = SavedSearchRepo::create(
        pool,
        &CreateSavedSearch {
            user_id: actor.user_id,
            name,
            query,
            filters,
        },
    )
    .await?;
    tracing::info!(saved_search_id = search.id, user_id = actor.user_id, "Saved search created");
    Ok(search)
}

pub async fn update_search(
    pool: &PgPool,
    actor: &AuthUser,
    id: DbId,
    mut input: UpdateSavedSearch,
) -> AppResult<SavedSearch> {
    get_search(pool, actor, id).await?;
    if let Some(name) = input.name.as_deref() {
        let name = name.trim().to_string();
        ensure_search_name_free(pool, actor.user_id, &name, Some(id)).await?;
        input.name = Some(name);
    }
    SavedSearchRepo::update(pool, id, actor.user_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Saved search", id))
}

pub async fn delete_search(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<()> {
    if !SavedSearchRepo::delete(pool, id, actor.user_id).await? {
        return Err(AppError::not_found("Saved search", id));
    }
    tracing::info!(saved_search_id = id, user_id = actor.user_id, "Saved search deleted");
    Ok(())
}
