//! Route definitions for role listing and admin role management.
//!
//! Every endpoint requires the `admin` or `master` role.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET /  -> list_roles
/// ```
pub fn roles_router() -> Router<AppState> {
    Router::new().route("/", get(roles::list_roles))
}

/// Routes mounted at `/admin`.
///
/// ```text
/// GET  /users/{id}/roles                -> user_roles
/// POST /users/{id}/roles/{slug}/toggle  -> toggle_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/roles", get(roles::user_roles))
        .route("/users/{id}/roles/{slug}/toggle", post(roles::toggle_role))
}
