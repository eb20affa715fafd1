//! Enterprises and the resources hanging off them: address, employees, reviews.

use jobboard_core::roles::{ADMIN_ROLES, ROLE_ENTERPRISE};
use jobboard_core::slug::slugify;
use jobboard_core::types::DbId;
use jobboard_core::validation::{ensure_rating, ensure_sluggable};
use jobboard_db::models::address::{Address, UpsertAddress};
use jobboard_db::models::employee::{CreateEmployee, Employee};
use jobboard_db::models::enterprise::{CreateEnterprise, Enterprise, UpdateEnterprise};
use jobboard_db::models::review::{CreateReview, Review};
use jobboard_db::repositories::{
    AddressRepo, EmployeeRepo, EnterpriseRepo, ReviewRepo, RoleRepo, UserRoleRepo,
};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::services::accounts::find_user;
use crate::services::catalog::get_industry;

#[derive(Debug, Clone)]
pub struct NewEnterprise {
    pub industry_id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i32,
    pub title: String,
    pub comment: Option<String>,
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Enterprise>> {
    Ok(EnterpriseRepo::list(pool).await?)
}

pub async fn get_enterprise(pool: &PgPool, id: DbId) -> AppResult<Enterprise> {
    EnterpriseRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Enterprise", id))
}

/// Load an enterprise and require `actor` to own it.
pub async fn owned_enterprise(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<Enterprise> {
    let enterprise = get_enterprise(pool, id).await?;
    if enterprise.user_id != actor.user_id {
        return Err(AppError::forbidden("You do not own this enterprise"));
    }
    Ok(enterprise)
}

/// Create the caller's enterprise and grant them the `enterprise` role.
///
/// The role appears in tokens issued after the next login or refresh.
pub async fn create(pool: &PgPool, actor: &AuthUser, input: NewEnterprise) -> AppResult<Enterprise> {
    if EnterpriseRepo::find_by_user(pool, actor.user_id).await?.is_some() {
        return Err(AppError::conflict("You already own an enterprise"));
    }
    let name = input.name.trim().to_string();
    let slug = slugify(&name);
    ensure_sluggable("name", &slug)?;
    if EnterpriseRepo::exists_by_name(pool, &name, &slug, None).await? {
        return Err(AppError::conflict(format!(
            "Enterprise with name '{name}' already exists"
        )));
    }
    if let Some(industry_id) = input.industry_id {
        get_industry(pool, industry_id).await?;
    }

    let owner_role = RoleRepo::find_by_slug(pool, ROLE_ENTERPRISE).await?;
    let enterprise = EnterpriseRepo::create(
        pool,
        &CreateEnterprise {
            user_id: actor.user_id,
            industry_id: input.industry_id,
            name,
            slug,
            description: input.description,
            website: input.website,
            email: input.email,
            phone: input.phone,
            logo_url: input.logo_url,
        },
        owner_role.map(|role| role.id),
    )
    .await?;

    tracing::info!(enterprise_id = enterprise.id, user_id = actor.user_id, "Enterprise created");
    Ok(enterprise)
}

/// Owner-only partial update. A rename recomputes the slug.
pub async fn update(
    pool: &PgPool,
    actor: &AuthUser,
    id: DbId,
    mut input: UpdateEnterprise,
) -> AppResult<Enterprise> {
    owned_enterprise(pool, actor, id).await?;

    if let Some(name) = input.name.as_deref() {
        let name = name.trim().to_string();
        let slug = slugify(&name);
        ensure_sluggable("name", &slug)?;
        if EnterpriseRepo::exists_by_name(pool, &name, &slug, Some(id)).await? {
            return Err(AppError::conflict(format!(
                "Enterprise with name '{name}' already exists"
            )));
        }
        input.name = Some(name);
        input.slug = Some(slug);
    } else {
        input.slug = None;
    }
    if let Some(industry_id) = input.industry_id {
        get_industry(pool, industry_id).await?;
    }

    EnterpriseRepo::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Enterprise", id))
}

/// Owner or admin. The owner loses the `enterprise` role with it.
pub async fn delete(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<()> {
    let enterprise = get_enterprise(pool, id).await?;
    if enterprise.user_id != actor.user_id && !actor.has_any_role(&ADMIN_ROLES) {
        return Err(AppError::forbidden("You do not own this enterprise"));
    }
    if !EnterpriseRepo::delete(pool, id).await? {
        return Err(AppError::not_found("Enterprise", id));
    }
    if let Some(role) = RoleRepo::find_by_slug(pool, ROLE_ENTERPRISE).await? {
        UserRoleRepo::revoke(pool, enterprise.user_id, role.id).await?;
    }
    tracing::info!(enterprise_id = id, actor_id = actor.user_id, "Enterprise deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

pub async fn get_address(pool: &PgPool, enterprise_id: DbId) -> AppResult<Address> {
    get_enterprise(pool, enterprise_id).await?;
    AddressRepo::find_by_enterprise(pool, enterprise_id)
        .await?
        .ok_or_else(|| AppError::not_found("Address of enterprise", enterprise_id))
}

pub async fn put_address(
    pool: &PgPool,
    actor: &AuthUser,
    enterprise_id: DbId,
    input: UpsertAddress,
) -> AppResult<Address> {
    owned_enterprise(pool, actor, enterprise_id).await?;
    let address = AddressRepo::upsert(pool, enterprise_id, &input).await?;
    tracing::info!(enterprise_id, "Enterprise address saved");
    Ok(address)
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

pub async fn list_employees(pool: &PgPool, enterprise_id: DbId) -> AppResult<Vec<Employee>> {
    get_enterprise(pool, enterprise_id).await?;
    Ok(EmployeeRepo::list_for_enterprise(pool, enterprise_id).await?)
}

pub async fn add_employee(
    pool: &PgPool,
    actor: &AuthUser,
    input: CreateEmployee,
) -> AppResult<Employee> {
    owned_enterprise(pool, actor, input.enterprise_id).await?;
    find_user(pool, input.user_id).await?;
    if EmployeeRepo::exists(pool, input.enterprise_id, input.user_id).await? {
        return Err(AppError::conflict("User is already an employee of this enterprise"));
    }
    let employee = EmployeeRepo::create(pool, &input).await?;
    tracing::info!(
        employee_id = employee.id,
        enterprise_id = employee.enterprise_id,
        "Employee added"
    );
    Ok(employee)
}

pub async fn remove_employee(
    pool: &PgPool,
    actor: &AuthUser,
    enterprise_id: DbId,
    employee_id: DbId,
) -> AppResult<()> {
    owned_enterprise(pool, actor, enterprise_id).await?;
    let employee = EmployeeRepo::find_by_id(pool, employee_id)
        .await?
        .filter(|e| e.enterprise_id == enterprise_id)
        .ok_or_else(|| AppError::not_found("Employee", employee_id))?;
    EmployeeRepo::delete(pool, employee.id).await?;
    tracing::info!(employee_id, enterprise_id, "Employee removed");
    Ok(())
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

pub async fn list_reviews(pool: &PgPool, enterprise_id: DbId) -> AppResult<Vec<Review>> {
    get_enterprise(pool, enterprise_id).await?;
    Ok(ReviewRepo::list_for_enterprise(pool, enterprise_id).await?)
}

/// One review per user per enterprise; owners cannot review their own.
pub async fn add_review(
    pool: &PgPool,
    actor: &AuthUser,
    enterprise_id: DbId,
    input: NewReview,
) -> AppResult<Review> {
    ensure_rating(input.rating)?;
    let enterprise = get_enterprise(pool, enterprise_id).await?;
    if enterprise.user_id == actor.user_id {
        return Err(AppError::forbidden("You cannot review your own enterprise"));
    }
    if ReviewRepo::exists(pool, enterprise_id, actor.user_id).await? {
        return Err(AppError::conflict("You have already reviewed this enterprise"));
    }
    let review = ReviewRepo::create(
        pool,
        &CreateReview {
            enterprise_id,
            user_id: actor.user_id,
            rating: input.rating,
            title: input.title.trim().to_string(),
            comment: input.comment,
        },
    )
    .await?;
    tracing::info!(review_id = review.id, enterprise_id, "Review created");
    Ok(review)
}

pub async fn delete_review(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<()> {
    let review = ReviewRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Review", id))?;
    if review.user_id != actor.user_id {
        return Err(AppError::forbidden("You can only delete your own reviews"));
    }
    ReviewRepo::delete(pool, id).await?;
    tracing::info!(review_id = id, "Review deleted");
    Ok(())
}
