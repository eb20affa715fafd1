//! Route definitions for the admin-managed catalogs.
//!
//! Reads are public; writes require the `admin` or `master` role.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/industries`.
///
/// ```text
/// GET    /                    -> list_industries (?include_inactive)
/// POST   /                    -> create_industry
/// GET    /{id}                -> get_industry
/// PATCH  /{id}                -> update_industry
/// DELETE /{id}                -> delete_industry
/// PATCH  /{id}/toggle-active  -> toggle_industry
/// ```
pub fn industries_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(catalog::list_industries).post(catalog::create_industry),
        )
        .route(
            "/{id}",
            get(catalog::get_industry)
                .patch(catalog::update_industry)
                .delete(catalog::delete_industry),
        )
        .route("/{id}/toggle-active", patch(catalog::toggle_industry))
}

/// Routes mounted at `/areas`.
///
/// ```text
/// GET    /                    -> list_areas (?include_inactive)
/// POST   /                    -> create_area
/// GET    /{id}                -> get_area
/// PATCH  /{id}                -> update_area
/// DELETE /{id}                -> delete_area
/// PATCH  /{id}/toggle-active  -> toggle_area
/// GET    /{id}/categories     -> list_categories
/// POST   /{id}/categories     -> create_category
/// ```
pub fn areas_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_areas).post(catalog::create_area))
        .route(
            "/{id}",
            get(catalog::get_area)
                .patch(catalog::update_area)
                .delete(catalog::delete_area),
        )
        .route("/{id}/toggle-active", patch(catalog::toggle_area))
        .route(
            "/{id}/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
}

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /{id}  -> get_category
/// PATCH  /{id}  -> update_category
/// DELETE /{id}  -> delete_category
/// ```
pub fn categories_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(catalog::get_category)
            .patch(catalog::update_category)
            .delete(catalog::delete_category),
    )
}

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /      -> list_skills
/// POST   /      -> create_skill
/// GET    /{id}  -> get_skill
/// PATCH  /{id}  -> update_skill
/// DELETE /{id}  -> delete_skill
/// ```
pub fn skills_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_skills).post(catalog::create_skill))
        .route(
            "/{id}",
            get(catalog::get_skill)
                .patch(catalog::update_skill)
                .delete(catalog::delete_skill),
        )
}
