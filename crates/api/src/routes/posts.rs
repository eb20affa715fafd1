//! Route definitions for `/posts` and `/media`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /                 -> list_posts
/// POST   /                 -> create_post
/// GET    /{id}             -> get_post
/// PATCH  /{id}             -> update_post (author)
/// DELETE /{id}             -> delete_post (author)
/// GET    /{id}/media       -> list_media
/// POST   /{id}/media       -> add_media (author, at most 10)
/// GET    /{id}/reactions   -> reaction_counts
/// PUT    /{id}/reactions   -> react
/// DELETE /{id}/reactions   -> remove_reaction
/// POST   /{id}/favorite    -> favorite_post
/// DELETE /{id}/favorite    -> unfavorite_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/{id}/media", get(posts::list_media).post(posts::add_media))
        .route(
            "/{id}/reactions",
            get(posts::reaction_counts)
                .put(posts::react)
                .delete(posts::remove_reaction),
        )
        .route(
            "/{id}/favorite",
            post(posts::favorite_post).delete(posts::unfavorite_post),
        )
}

/// Routes mounted at `/media`.
///
/// ```text
/// DELETE /{id}  -> delete_media (post author)
/// ```
pub fn media_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(posts::delete_media))
}
