//! Handlers for `/vacancies`, their skills and favorites.

use axum::extract::State;
use jobboard_core::types::DbId;
use jobboard_db::models::favorite::FavoriteVacancy;
use jobboard_db::models::skill::VacancySkill;
use jobboard_db::models::vacancy::{UpdateVacancy, Vacancy};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{IdPairPath, IdPath, Json, Query, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::vacancies::{self, NewVacancy};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /vacancies`.
#[derive(Debug, Default, Deserialize)]
pub struct VacancyListQuery {
    /// Include closed vacancies. Defaults to `false`.
    pub include_closed: Option<bool>,
}

/// Request body for `POST /enterprises/{id}/vacancies`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVacancyRequest {
    pub area_id: Option<DbId>,
    pub category_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 20000))]
    pub description: String,
    #[validate(length(max = 40))]
    pub employment_type: Option<String>,
    #[validate(length(max = 40))]
    pub work_model: Option<String>,
    #[validate(range(min = 0))]
    pub salary_min: Option<i64>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i64>,
}

/// Request body for `PATCH /vacancies/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVacancyRequest {
    pub area_id: Option<DbId>,
    pub category_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,
    #[validate(length(max = 40))]
    pub employment_type: Option<String>,
    #[validate(length(max = 40))]
    pub work_model: Option<String>,
    #[validate(range(min = 0))]
    pub salary_min: Option<i64>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i64>,
    pub is_open: Option<bool>,
}

/// Request body for `PUT /vacancies/{id}/skills/{skill_id}`.
#[derive(Debug, Deserialize)]
pub struct VacancySkillRequest {
    #[serde(default = "default_required")]
    pub is_required: bool,
}

fn default_required() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Vacancies
// ---------------------------------------------------------------------------

/// GET /api/v1/vacancies
pub async fn list_vacancies(
    State(state): State<AppState>,
    Query(params): Query<VacancyListQuery>,
) -> AppResult<ApiResponse<Vec<Vacancy>>> {
    let include_closed = params.include_closed.unwrap_or(false);
    Ok(ApiResponse::ok(vacancies::list(&state.pool, include_closed).await?))
}

/// GET /api/v1/vacancies/{id}
pub async fn get_vacancy(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vacancy>> {
    Ok(ApiResponse::ok(vacancies::get_vacancy(&state.pool, id).await?))
}

/// GET /api/v1/enterprises/{id}/vacancies
pub async fn list_enterprise_vacancies(
    State(state): State<AppState>,
    IdPath(enterprise_id): IdPath,
) -> AppResult<ApiResponse<Vec<Vacancy>>> {
    Ok(ApiResponse::ok(
        vacancies::list_by_enterprise(&state.pool, enterprise_id).await?,
    ))
}

/// POST /api/v1/enterprises/{id}/vacancies
///
/// Followers of the enterprise are notified of the new vacancy.
pub async fn create_vacancy(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(enterprise_id): IdPath,
    ValidJson(input): ValidJson<CreateVacancyRequest>,
) -> AppResult<ApiResponse<Vacancy>> {
    let vacancy = vacancies::create(
        &state.pool,
        &auth,
        enterprise_id,
        NewVacancy {
            area_id: input.area_id,
            category_id: input.category_id,
            title: input.title,
            description: input.description,
            employment_type: input.employment_type,
            work_model: input.work_model,
            salary_min: input.salary_min,
            salary_max: input.salary_max,
        },
    )
    .await?;
    Ok(ApiResponse::created(vacancy))
}

/// PATCH /api/v1/vacancies/{id}
pub async fn update_vacancy(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateVacancyRequest>,
) -> AppResult<ApiResponse<Vacancy>> {
    let patch = UpdateVacancy {
        area_id: input.area_id,
        category_id: input.category_id,
        title: input.title,
        description: input.description,
        employment_type: input.employment_type,
        work_model: input.work_model,
        salary_min: input.salary_min,
        salary_max: input.salary_max,
        is_open: input.is_open,
    };
    let vacancy = vacancies::update(&state.pool, &auth, id, patch).await?;
    Ok(ApiResponse::ok(vacancy).message("Vacancy updated"))
}

/// DELETE /api/v1/vacancies/{id}
pub async fn delete_vacancy(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    vacancies::delete(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Vacancy"))
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// GET /api/v1/vacancies/{id}/skills
pub async fn list_vacancy_skills(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vec<VacancySkill>>> {
    Ok(ApiResponse::ok(vacancies::list_skills(&state.pool, id).await?))
}

/// PUT /api/v1/vacancies/{id}/skills/{skill_id}
pub async fn put_vacancy_skill(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPairPath(id, skill_id): IdPairPath,
    Json(input): Json<VacancySkillRequest>,
) -> AppResult<ApiResponse<VacancySkill>> {
    let skill = vacancies::put_skill(&state.pool, &auth, id, skill_id, input.is_required).await?;
    Ok(ApiResponse::ok(skill).message("Vacancy skill saved"))
}

/// DELETE /api/v1/vacancies/{id}/skills/{skill_id}
pub async fn delete_vacancy_skill(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPairPath(id, skill_id): IdPairPath,
) -> AppResult<ApiResponse<()>> {
    vacancies::remove_skill(&state.pool, &auth, id, skill_id).await?;
    Ok(ApiResponse::deleted("Vacancy skill"))
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// POST /api/v1/vacancies/{id}/favorite
pub async fn favorite_vacancy(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<FavoriteVacancy>> {
    let favorite = vacancies::favorite(&state.pool, &auth, id).await?;
    Ok(ApiResponse::ok(favorite).message("Vacancy added to favorites"))
}

/// DELETE /api/v1/vacancies/{id}/favorite
pub async fn unfavorite_vacancy(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    vacancies::unfavorite(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Favorite"))
}

/// GET /api/v1/favorites/vacancies
pub async fn favorite_vacancies(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Vacancy>>> {
    Ok(ApiResponse::ok(vacancies::favorites(&state.pool, &auth).await?))
}
