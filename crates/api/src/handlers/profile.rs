//! Handlers for caller-scoped resources: `/me/skills`, `/curriculums` and
//! `/saved-searches`. Another user's rows are reported as 404.

use axum::extract::State;
use jobboard_core::types::DbId;
use jobboard_db::models::curriculum::{CreateCurriculum, Curriculum, UpdateCurriculum};
use jobboard_db::models::saved_search::{SavedSearch, UpdateSavedSearch};
use jobboard_db::models::skill::{UpdateUserSkill, UserSkill};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::profile;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /me/skills`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddSkillRequest {
    pub skill_id: DbId,
    pub level: String,
    #[validate(range(min = 0, max = 80))]
    pub years_experience: Option<i32>,
}

/// Request body for `PATCH /me/skills/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    pub level: Option<String>,
    #[validate(range(min = 0, max = 80))]
    pub years_experience: Option<i32>,
}

/// Request body for `POST /curriculums`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCurriculumRequest {
    #[validate(length(min = 1, max = 200))]
    pub headline: String,
    #[validate(length(max = 10000))]
    pub summary: Option<String>,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(url)]
    pub linkedin_url: Option<String>,
    #[validate(url)]
    pub portfolio_url: Option<String>,
}

/// Request body for `PATCH /curriculums/me`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCurriculumRequest {
    #[validate(length(min = 1, max = 200))]
    pub headline: Option<String>,
    #[validate(length(max = 10000))]
    pub summary: Option<String>,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(url)]
    pub linkedin_url: Option<String>,
    #[validate(url)]
    pub portfolio_url: Option<String>,
}

/// Request body for `POST /saved-searches`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSavedSearchRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub query: String,
    /// Free-form filter object, stored as JSON.
    #[serde(default = "empty_filters")]
    pub filters: serde_json::Value,
}

/// Request body for `PATCH /saved-searches/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSavedSearchRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub query: Option<String>,
    pub filters: Option<serde_json::Value>,
}

fn empty_filters() -> serde_json::Value {
    serde_json::json!({})
}

// ---------------------------------------------------------------------------
// My skills
// ---------------------------------------------------------------------------

/// GET /api/v1/me/skills
pub async fn list_my_skills(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<UserSkill>>> {
    Ok(ApiResponse::ok(profile::list_skills(&state.pool, &auth).await?))
}

/// POST /api/v1/me/skills
pub async fn add_my_skill(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<AddSkillRequest>,
) -> AppResult<ApiResponse<UserSkill>> {
    let skill_id = jobboard_core::validation::ensure_valid_id("Skill", input.skill_id)?;
    let skill =
        profile::add_skill(&state.pool, &auth, skill_id, input.level, input.years_experience)
            .await?;
    Ok(ApiResponse::created(skill))
}

/// PATCH /api/v1/me/skills/{id}
pub async fn update_my_skill(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateSkillRequest>,
) -> AppResult<ApiResponse<UserSkill>> {
    let patch = UpdateUserSkill {
        level: input.level,
        years_experience: input.years_experience,
    };
    let skill = profile::update_skill(&state.pool, &auth, id, patch).await?;
    Ok(ApiResponse::ok(skill).message("Skill updated"))
}

/// DELETE /api/v1/me/skills/{id}
pub async fn delete_my_skill(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    profile::remove_skill(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Skill"))
}

// ---------------------------------------------------------------------------
// Curriculum
// ---------------------------------------------------------------------------

/// POST /api/v1/curriculums
pub async fn create_curriculum(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateCurriculumRequest>,
) -> AppResult<ApiResponse<Curriculum>> {
    let curriculum = profile::create_curriculum(
        &state.pool,
        &auth,
        CreateCurriculum {
            user_id: auth.user_id,
            headline: input.headline,
            summary: input.summary,
            phone: input.phone,
            linkedin_url: input.linkedin_url,
            portfolio_url: input.portfolio_url,
        },
    )
    .await?;
    Ok(ApiResponse::created(curriculum))
}

/// GET /api/v1/curriculums/me
pub async fn my_curriculum(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Curriculum>> {
    Ok(ApiResponse::ok(profile::my_curriculum(&state.pool, &auth).await?))
}

/// PATCH /api/v1/curriculums/me
pub async fn update_my_curriculum(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<UpdateCurriculumRequest>,
) -> AppResult<ApiResponse<Curriculum>> {
    let patch = UpdateCurriculum {
        headline: input.headline,
        summary: input.summary,
        phone: input.phone,
        linkedin_url: input.linkedin_url,
        portfolio_url: input.portfolio_url,
    };
    let curriculum = profile::update_curriculum(&state.pool, &auth, patch).await?;
    Ok(ApiResponse::ok(curriculum).message("Curriculum updated"))
}

/// DELETE /api/v1/curriculums/me
pub async fn delete_my_curriculum(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<()>> {
    profile::delete_curriculum(&state.pool, &auth).await?;
    Ok(ApiResponse::deleted("Curriculum"))
}

/// GET /api/v1/users/{id}/curriculum
pub async fn user_curriculum(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> AppResult<ApiResponse<Curriculum>> {
    Ok(ApiResponse::ok(profile::curriculum_of(&state.pool, user_id).await?))
}

// ---------------------------------------------------------------------------
// Saved searches
// ---------------------------------------------------------------------------

/// GET /api/v1/saved-searches
pub async fn list_saved_searches(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<SavedSearch>>> {
    Ok(ApiResponse::ok(profile::list_searches(&state.pool, &auth).await?))
}

/// POST /api/v1/saved-searches
pub async fn create_saved_search(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateSavedSearchRequest>,
) -> AppResult<ApiResponse<SavedSearch>> {
    let search =
        profile::create_search(&state.pool, &auth, input.name, input.query, input.filters).await?;
    Ok(ApiResponse::created(search))
}

/// GET /api/v1/saved-searches/{id}
pub async fn get_saved_search(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<SavedSearch>> {
    Ok(ApiResponse::ok(profile::get_search(&state.pool, &auth, id).await?))
}

/// PATCH /api/v1/saved-searches/{id}
pub async fn update_saved_search(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateSavedSearchRequest>,
) -> AppResult<ApiResponse<SavedSearch>> {
    let patch = UpdateSavedSearch {
        name: input.name,
        query: input.query,
        filters: input.filters,
    };
    let search = profile::update_search(&state.pool, &auth, id, patch).await?;
    Ok(ApiResponse::ok(search).message("Saved search updated"))
}

/// DELETE /api/v1/saved-searches/{id}
pub async fn delete_saved_search(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    profile::delete_search(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Saved search"))
}
