//! Role listing and the admin toggle-role workflow.

use jobboard_core::error::CoreError;
use jobboard_core::roles::ensure_can_toggle;
use jobboard_core::types::DbId;
use jobboard_db::models::role::Role;
use jobboard_db::repositories::{RoleRepo, UserRoleRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::services::accounts::find_user;

/// Outcome of a toggle: whether the role is now held, and the full role set.
#[derive(Debug, Serialize)]
pub struct RoleToggle {
    pub user_id: DbId,
    pub role: String,
    pub assigned: bool,
    pub roles: Vec<String>,
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Role>> {
    Ok(RoleRepo::list(pool).await?)
}

pub async fn roles_of(pool: &PgPool, user_id: DbId) -> AppResult<Vec<String>> {
    find_user(pool, user_id).await?;
    Ok(UserRoleRepo::slugs_for_user(pool, user_id).await?)
}

/// Grant `role_slug` to the user if absent, revoke it if present.
///
/// Existence is checked first (404), then the toggle rules (403). The
/// actor's roles are read from the database rather than the token.
pub async fn toggle(
    pool: &PgPool,
    actor: &AuthUser,
    user_id: DbId,
    role_slug: &str,
) -> AppResult<RoleToggle> {
    let role = RoleRepo::find_by_slug(pool, role_slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Role",
                key: role_slug.to_string(),
            })
        })?;
    find_user(pool, user_id).await?;

    let actor_roles = UserRoleRepo::slugs_for_user(pool, actor.user_id).await?;
    ensure_can_toggle(actor.user_id, &actor_roles, user_id, &role.slug)?;

    let assigned = if UserRoleRepo::has_role(pool, user_id, role.id).await? {
        UserRoleRepo::revoke(pool, user_id, role.id).await?;
        false
    } else {
        UserRoleRepo::assign(pool, user_id, role.id).await?;
        true
    };

    tracing::info!(
        actor_id = actor.user_id,
        user_id,
        role = %role.slug,
        assigned,
        "Role toggled"
    );

    Ok(RoleToggle {
        user_id,
        role: role.slug,
        assigned,
        roles: UserRoleRepo::slugs_for_user(pool, user_id).await?,
    })
}
