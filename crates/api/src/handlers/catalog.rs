//! Handlers for the admin-managed catalogs: industries, areas, categories
//! and skills. Reads are public; writes require [`RequireAdmin`].

use axum::extract::State;
use jobboard_db::models::area::Area;
use jobboard_db::models::category::Category;
use jobboard_db::models::industry::Industry;
use jobboard_db::models::skill::Skill;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{IdPath, Query, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::services::catalog::{self, CatalogEntry, CatalogPatch};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for creating any catalog entry.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCatalogRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl From<CreateCatalogRequest> for CatalogEntry {
    fn from(req: CreateCatalogRequest) -> Self {
        CatalogEntry {
            name: req.name,
            description: req.description,
        }
    }
}

/// Request body for patching any catalog entry.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCatalogRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl From<UpdateCatalogRequest> for CatalogPatch {
    fn from(req: UpdateCatalogRequest) -> Self {
        CatalogPatch {
            name: req.name,
            description: req.description,
        }
    }
}

/// Query parameters for toggleable catalog listings.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogListQuery {
    /// Include deactivated entries. Defaults to `false`.
    pub include_inactive: Option<bool>,
}

// ---------------------------------------------------------------------------
// Industries
// ---------------------------------------------------------------------------

/// GET /api/v1/industries
pub async fn list_industries(
    State(state): State<AppState>,
    Query(params): Query<CatalogListQuery>,
) -> AppResult<ApiResponse<Vec<Industry>>> {
    let include_inactive = params.include_inactive.unwrap_or(false);
    Ok(ApiResponse::ok(catalog::list_industries(&state.pool, include_inactive).await?))
}

/// GET /api/v1/industries/{id}
pub async fn get_industry(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Industry>> {
    Ok(ApiResponse::ok(catalog::get_industry(&state.pool, id).await?))
}

/// POST /api/v1/industries
pub async fn create_industry(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateCatalogRequest>,
) -> AppResult<ApiResponse<Industry>> {
    let industry = catalog::create_industry(&state.pool, input.into()).await?;
    Ok(ApiResponse::created(industry))
}

/// PATCH /api/v1/industries/{id}
pub async fn update_industry(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateCatalogRequest>,
) -> AppResult<ApiResponse<Industry>> {
    let industry = catalog::update_industry(&state.pool, id, input.into()).await?;
    Ok(ApiResponse::ok(industry).message("Industry updated"))
}

/// PATCH /api/v1/industries/{id}/toggle-active
pub async fn toggle_industry(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Industry>> {
    let industry = catalog::toggle_industry(&state.pool, id).await?;
    let message = active_message("Industry", industry.is_active);
    Ok(ApiResponse::ok(industry).message(message))
}

/// DELETE /api/v1/industries/{id}
pub async fn delete_industry(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    catalog::delete_industry(&state.pool, id).await?;
    Ok(ApiResponse::deleted("Industry"))
}

// ---------------------------------------------------------------------------
// Areas
// ---------------------------------------------------------------------------

/// GET /api/v1/areas
pub async fn list_areas(
    State(state): State<AppState>,
    Query(params): Query<CatalogListQuery>,
) -> AppResult<ApiResponse<Vec<Area>>> {
    let include_inactive = params.include_inactive.unwrap_or(false);
    Ok(ApiResponse::ok(catalog::list_areas(&state.pool, include_inactive).await?))
}

/// GET /api/v1/areas/{id}
pub async fn get_area(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Area>> {
    Ok(ApiResponse::ok(catalog::get_area(&state.pool, id).await?))
}

/// POST /api/v1/areas
pub async fn create_area(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateCatalogRequest>,
) -> AppResult<ApiResponse<Area>> {
    Ok(ApiResponse::created(catalog::create_area(&state.pool, input.into()).await?))
}

/// PATCH /api/v1/areas/{id}
pub async fn update_area(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateCatalogRequest>,
) -> AppResult<ApiResponse<Area>> {
    let area = catalog::update_area(&state.pool, id, input.into()).await?;
    Ok(ApiResponse::ok(area).message("Area updated"))
}

/// PATCH /api/v1/areas/{id}/toggle-active
pub async fn toggle_area(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Area>> {
    let area = catalog::toggle_area(&state.pool, id).await?;
    let message = active_message("Area", area.is_active);
    Ok(ApiResponse::ok(area).message(message))
}

/// DELETE /api/v1/areas/{id}
pub async fn delete_area(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    catalog::delete_area(&state.pool, id).await?;
    Ok(ApiResponse::deleted("Area"))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/areas/{area_id}/categories
pub async fn list_categories(
    State(state): State<AppState>,
    IdPath(area_id): IdPath,
) -> AppResult<ApiResponse<Vec<Category>>> {
    Ok(ApiResponse::ok(catalog::list_categories(&state.pool, area_id).await?))
}

/// POST /api/v1/areas/{area_id}/categories
pub async fn create_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(area_id): IdPath,
    ValidJson(input): ValidJson<CreateCatalogRequest>,
) -> AppResult<ApiResponse<Category>> {
    let category = catalog::create_category(&state.pool, area_id, input.into()).await?;
    Ok(ApiResponse::created(category))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Category>> {
    Ok(ApiResponse::ok(catalog::get_category(&state.pool, id).await?))
}

/// PATCH /api/v1/categories/{id}
pub async fn update_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateCatalogRequest>,
) -> AppResult<ApiResponse<Category>> {
    let category = catalog::update_category(&state.pool, id, input.into()).await?;
    Ok(ApiResponse::ok(category).message("Category updated"))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    catalog::delete_category(&state.pool, id).await?;
    Ok(ApiResponse::deleted("Category"))
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// GET /api/v1/skills
pub async fn list_skills(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Skill>>> {
    Ok(ApiResponse::ok(catalog::list_skills(&state.pool).await?))
}

/// GET /api/v1/skills/{id}
pub async fn get_skill(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Skill>> {
    Ok(ApiResponse::ok(catalog::get_skill(&state.pool, id).await?))
}

/// POST /api/v1/skills
pub async fn create_skill(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateCatalogRequest>,
) -> AppResult<ApiResponse<Skill>> {
    Ok(ApiResponse::created(catalog::create_skill(&state.pool, input.into()).await?))
}

/// PATCH /api/v1/skills/{id}
pub async fn update_skill(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateCatalogRequest>,
) -> AppResult<ApiResponse<Skill>> {
    let skill = catalog::update_skill(&state.pool, id, input.into()).await?;
    Ok(ApiResponse::ok(skill).message("Skill updated"))
}

/// DELETE /api/v1/skills/{id}
pub async fn delete_skill(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    catalog::delete_skill(&state.pool, id).await?;
    Ok(ApiResponse::deleted("Skill"))
}

fn active_message(entity: &str, is_active: bool) -> String {
    if is_active {
        format!("{entity} activated")
    } else {
        format!("{entity} deactivated")
    }
}
