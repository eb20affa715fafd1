//! Route definitions for caller-scoped resources.
//!
//! All endpoints require authentication.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{posts, profile, vacancies};
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET    /skills       -> list_my_skills
/// POST   /skills       -> add_my_skill
/// PATCH  /skills/{id}  -> update_my_skill
/// DELETE /skills/{id}  -> delete_my_skill
/// ```
pub fn me_router() -> Router<AppState> {
    Router::new()
        .route(
            "/skills",
            get(profile::list_my_skills).post(profile::add_my_skill),
        )
        .route(
            "/skills/{id}",
            patch(profile::update_my_skill).delete(profile::delete_my_skill),
        )
}

/// Routes mounted at `/curriculums`.
///
/// ```text
/// POST   /    -> create_curriculum
/// GET    /me  -> my_curriculum
/// PATCH  /me  -> update_my_curriculum
/// DELETE /me  -> delete_my_curriculum
/// ```
pub fn curriculums_router() -> Router<AppState> {
    Router::new()
        .route("/", post(profile::create_curriculum))
        .route(
            "/me",
            get(profile::my_curriculum)
                .patch(profile::update_my_curriculum)
                .delete(profile::delete_my_curriculum),
        )
}

/// Routes mounted at `/saved-searches`.
///
/// ```text
/// GET    /      -> list_saved_searches
/// POST   /      -> create_saved_search
/// GET    /{id}  -> get_saved_search
/// PATCH  /{id}  -> update_saved_search
/// DELETE /{id}  -> delete_saved_search
/// ```
pub fn saved_searches_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(profile::list_saved_searches).post(profile::create_saved_search),
        )
        .route(
            "/{id}",
            get(profile::get_saved_search)
                .patch(profile::update_saved_search)
                .delete(profile::delete_saved_search),
        )
}

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET /posts      -> favorite_posts
/// GET /vacancies  -> favorite_vacancies
/// ```
pub fn favorites_router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::favorite_posts))
        .route("/vacancies", get(vacancies::favorite_vacancies))
}
