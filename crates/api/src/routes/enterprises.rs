//! Route definitions for `/enterprises` and `/reviews`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{enterprises, follows, posts, vacancies};
use crate::state::AppState;

/// Routes mounted at `/enterprises`.
///
/// ```text
/// GET    /                                -> list_enterprises
/// POST   /                                -> create_enterprise
/// GET    /{id}                            -> get_enterprise
/// PATCH  /{id}                            -> update_enterprise (owner)
/// DELETE /{id}                            -> delete_enterprise (owner or admin)
///
/// GET    /{id}/address                    -> get_address
/// PUT    /{id}/address                    -> put_address (owner)
///
/// GET    /{id}/employees                  -> list_employees
/// POST   /{id}/employees                  -> add_employee (owner)
/// DELETE /{id}/employees/{employee_id}    -> remove_employee (owner)
///
/// GET    /{id}/reviews                    -> list_reviews
/// POST   /{id}/reviews                    -> create_review
///
/// POST   /{id}/follow                     -> follow_enterprise
/// DELETE /{id}/follow                     -> unfollow_enterprise
/// GET    /{id}/followers                  -> enterprise_followers
///
/// GET    /{id}/vacancies                  -> list_enterprise_vacancies
/// POST   /{id}/vacancies                  -> create_vacancy (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(enterprises::list_enterprises).post(enterprises::create_enterprise),
        )
        .route(
            "/{id}",
            get(enterprises::get_enterprise)
                .patch(enterprises::update_enterprise)
                .delete(enterprises::delete_enterprise),
        )
        .route(
            "/{id}/address",
            get(enterprises::get_address).put(enterprises::put_address),
        )
        .route(
            "/{id}/employees",
            get(enterprises::list_employees).post(enterprises::add_employee),
        )
        .route(
            "/{id}/employees/{employee_id}",
            delete(enterprises::remove_employee),
        )
        .route(
            "/{id}/reviews",
            get(enterprises::list_reviews).post(enterprises::create_review),
        )
        .route(
            "/{id}/follow",
            post(follows::follow_enterprise).delete(follows::unfollow_enterprise),
        )
        .route("/{id}/followers", get(follows::enterprise_followers))
        .route("/{id}/posts", get(posts::list_enterprise_posts))
        .route(
            "/{id}/vacancies",
            get(vacancies::list_enterprise_vacancies).post(vacancies::create_vacancy),
        )
}

/// Routes mounted at `/reviews`.
///
/// ```text
/// DELETE /{id}  -> delete_review (author)
/// ```
pub fn reviews_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(enterprises::delete_review))
}
