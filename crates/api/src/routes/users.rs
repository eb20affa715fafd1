//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{follows, posts, profile, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /{id}             -> get_user
/// PATCH  /{id}             -> update_user (self or admin)
/// DELETE /{id}             -> delete_user (self or admin)
/// POST   /{id}/follow      -> follow_user
/// DELETE /{id}/follow      -> unfollow_user
/// GET    /{id}/followers   -> user_followers
/// GET    /{id}/following   -> user_following
/// GET    /{id}/posts       -> list_user_posts
/// GET    /{id}/curriculum  -> user_curriculum
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/{id}/follow",
            post(follows::follow_user).delete(follows::unfollow_user),
        )
        .route("/{id}/followers", get(follows::user_followers))
        .route("/{id}/following", get(follows::user_following))
        .route("/{id}/posts", get(posts::list_user_posts))
        .route("/{id}/curriculum", get(profile::user_curriculum))
}
