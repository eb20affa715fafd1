//! Handlers for `/enterprises` and the resources nested under it:
//! address, employees and reviews.

use axum::extract::State;
use jobboard_core::types::{DbId, Timestamp};
use jobboard_db::models::address::{Address, UpsertAddress};
use jobboard_db::models::employee::{CreateEmployee, Employee};
use jobboard_db::models::enterprise::{Enterprise, UpdateEnterprise};
use jobboard_db::models::review::Review;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{IdPairPath, IdPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::enterprises::{self, NewEnterprise, NewReview};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /enterprises`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEnterpriseRequest {
    pub industry_id: Option<DbId>,
    #[validate(length(min = 1, max = 160))]
    pub name: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

/// Request body for `PATCH /enterprises/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEnterpriseRequest {
    pub industry_id: Option<DbId>,
    #[validate(length(min = 1, max = 160))]
    pub name: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

/// Request body for `PUT /enterprises/{id}/address`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(length(min = 1, max = 200))]
    pub street: String,
    #[validate(length(max = 20))]
    pub number: Option<String>,
    #[validate(length(max = 200))]
    pub complement: Option<String>,
    #[validate(length(max = 120))]
    pub district: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub city: String,
    #[validate(length(max = 120))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub country: String,
    #[validate(length(max = 20))]
    pub zipcode: Option<String>,
}

/// Request body for `POST /enterprises/{id}/employees`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddEmployeeRequest {
    pub user_id: DbId,
    #[validate(length(min = 1, max = 120))]
    pub position: String,
    pub started_at: Option<Timestamp>,
}

/// Request body for `POST /enterprises/{id}/reviews`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub comment: Option<String>,
}

// ---------------------------------------------------------------------------
// Enterprise CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/enterprises
pub async fn list_enterprises(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Enterprise>>> {
    Ok(ApiResponse::ok(enterprises::list(&state.pool).await?))
}

/// GET /api/v1/enterprises/{id}
pub async fn get_enterprise(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Enterprise>> {
    Ok(ApiResponse::ok(enterprises::get_enterprise(&state.pool, id).await?))
}

/// POST /api/v1/enterprises
///
/// A user owns at most one enterprise. Creating it grants the `enterprise`
/// role, visible in tokens issued from the next refresh on.
pub async fn create_enterprise(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateEnterpriseRequest>,
) -> AppResult<ApiResponse<Enterprise>> {
    let enterprise = enterprises::create(
        &state.pool,
        &auth,
        NewEnterprise {
            industry_id: input.industry_id,
            name: input.name,
            description: input.description,
            website: input.website,
            email: input.email,
            phone: input.phone,
            logo_url: input.logo_url,
        },
    )
    .await?;
    Ok(ApiResponse::created(enterprise))
}

/// PATCH /api/v1/enterprises/{id}
pub async fn update_enterprise(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateEnterpriseRequest>,
) -> AppResult<ApiResponse<Enterprise>> {
    let patch = UpdateEnterprise {
        industry_id: input.industry_id,
        name: input.name,
        slug: None,
        description: input.description,
        website: input.website,
        email: input.email,
        phone: input.phone,
        logo_url: input.logo_url,
    };
    let enterprise = enterprises::update(&state.pool, &auth, id, patch).await?;
    Ok(ApiResponse::ok(enterprise).message("Enterprise updated"))
}

/// DELETE /api/v1/enterprises/{id}
pub async fn delete_enterprise(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    enterprises::delete(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Enterprise"))
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// GET /api/v1/enterprises/{id}/address
pub async fn get_address(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Address>> {
    Ok(ApiResponse::ok(enterprises::get_address(&state.pool, id).await?))
}

/// PUT /api/v1/enterprises/{id}/address
pub async fn put_address(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<AddressRequest>,
) -> AppResult<ApiResponse<Address>> {
    let address = UpsertAddress {
        street: input.street,
        number: input.number,
        complement: input.complement,
        district: input.district,
        city: input.city,
        state: input.state,
        country: input.country,
        zipcode: input.zipcode,
    };
    let address = enterprises::put_address(&state.pool, &auth, id, address).await?;
    Ok(ApiResponse::ok(address).message("Address saved"))
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

/// GET /api/v1/enterprises/{id}/employees
pub async fn list_employees(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vec<Employee>>> {
    Ok(ApiResponse::ok(enterprises::list_employees(&state.pool, id).await?))
}

/// POST /api/v1/enterprises/{id}/employees
pub async fn add_employee(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<AddEmployeeRequest>,
) -> AppResult<ApiResponse<Employee>> {
    let user_id = jobboard_core::validation::ensure_valid_id("User", input.user_id)?;
    let employee = enterprises::add_employee(
        &state.pool,
        &auth,
        CreateEmployee {
            enterprise_id: id,
            user_id,
            position: input.position,
            started_at: input.started_at,
        },
    )
    .await?;
    Ok(ApiResponse::created(employee))
}

/// DELETE /api/v1/enterprises/{id}/employees/{employee_id}
pub async fn remove_employee(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPairPath(id, employee_id): IdPairPath,
) -> AppResult<ApiResponse<()>> {
    enterprises::remove_employee(&state.pool, &auth, id, employee_id).await?;
    Ok(ApiResponse::deleted("Employee"))
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// GET /api/v1/enterprises/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Vec<Review>>> {
    Ok(ApiResponse::ok(enterprises::list_reviews(&state.pool, id).await?))
}

/// POST /api/v1/enterprises/{id}/reviews
pub async fn create_review(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<CreateReviewRequest>,
) -> AppResult<ApiResponse<Review>> {
    let review = enterprises::add_review(
        &state.pool,
        &auth,
        id,
        NewReview {
            rating: input.rating,
            title: input.title,
            comment: input.comment,
        },
    )
    .await?;
    Ok(ApiResponse::created(review))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete_review(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<()>> {
    enterprises::delete_review(&state.pool, &auth, id).await?;
    Ok(ApiResponse::deleted("Review"))
}
