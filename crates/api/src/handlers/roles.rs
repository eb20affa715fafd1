//! Handlers for role listing and the admin toggle-role workflow.

use axum::extract::State;
use jobboard_core::types::DbId;
use jobboard_db::models::role::Role;

use crate::error::AppResult;
use crate::extract::{IdPath, Path};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::services::roles::{self, RoleToggle};
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn list_roles(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Role>>> {
    Ok(ApiResponse::ok(roles::list(&state.pool).await?))
}

/// GET /api/v1/admin/users/{id}/roles
pub async fn user_roles(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> AppResult<ApiResponse<Vec<String>>> {
    Ok(ApiResponse::ok(roles::roles_of(&state.pool, user_id).await?))
}

/// POST /api/v1/admin/users/{id}/roles/{slug}/toggle
///
/// Grant the role if the user lacks it, revoke it otherwise.
pub async fn toggle_role(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((user_id, slug)): Path<(DbId, String)>,
) -> AppResult<ApiResponse<RoleToggle>> {
    let user_id = jobboard_core::validation::ensure_valid_id("User", user_id)?;
    let outcome = roles::toggle(&state.pool, &admin, user_id, &slug).await?;
    let message = if outcome.assigned {
        format!("Role '{}' granted", outcome.role)
    } else {
        format!("Role '{}' revoked", outcome.role)
    };
    Ok(ApiResponse::ok(outcome).message(message))
}
