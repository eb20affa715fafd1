//! Route definitions for the `/vacancies` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::vacancies;
use crate::state::AppState;

/// Routes mounted at `/vacancies`.
///
/// ```text
/// GET    /                       -> list_vacancies (?include_closed)
/// GET    /{id}                   -> get_vacancy
/// PATCH  /{id}                   -> update_vacancy (owner)
/// DELETE /{id}                   -> delete_vacancy (owner)
/// GET    /{id}/skills            -> list_vacancy_skills
/// PUT    /{id}/skills/{skill_id} -> put_vacancy_skill (owner)
/// DELETE /{id}/skills/{skill_id} -> delete_vacancy_skill (owner)
/// POST   /{id}/favorite          -> favorite_vacancy
/// DELETE /{id}/favorite          -> unfavorite_vacancy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vacancies::list_vacancies))
        .route(
            "/{id}",
            get(vacancies::get_vacancy)
                .patch(vacancies::update_vacancy)
                .delete(vacancies::delete_vacancy),
        )
        .route("/{id}/skills", get(vacancies::list_vacancy_skills))
        .route(
            "/{id}/skills/{skill_id}",
            put(vacancies::put_vacancy_skill).delete(vacancies::delete_vacancy_skill),
        )
        .route(
            "/{id}/favorite",
            post(vacancies::favorite_vacancy).delete(vacancies::unfavorite_vacancy),
        )
}
