//! Startup seeding of the fixed role set and the system super-admin.
//!
//! Runs after migrations on every boot. Existing rows are left as they are,
//! so running it again changes nothing.

use jobboard_core::roles::{ROLE_MASTER, SYSTEM_ROLES};
use jobboard_core::types::DbId;
use jobboard_db::models::user::CreateUser;
use jobboard_db::repositories::{RoleRepo, UserRepo, UserRoleRepo};
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// What the bootstrap found or created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub system_user_id: DbId,
    /// `true` when the system user did not exist before this run.
    pub system_user_created: bool,
}

/// Ensure every system role exists and the system user holds `master`.
pub async fn run(pool: &PgPool, config: &ServerConfig) -> AppResult<BootstrapReport> {
    for role in SYSTEM_ROLES {
        RoleRepo::ensure(pool, role.slug, role.title, role.description).await?;
    }

    let master = RoleRepo::find_by_slug(pool, ROLE_MASTER)
        .await?
        .ok_or_else(|| AppError::InternalError("master role missing after bootstrap".into()))?;

    let system = &config.system_user;
    let (user, created) = match UserRepo::find_by_email(pool, &system.email).await? {
        Some(user) => (user, false),
        None => {
            let password_hash = hash_password(&system.password, &config.password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
            let user = UserRepo::create(
                pool,
                &CreateUser {
                    name: system.name.clone(),
                    email: system.email.clone(),
                    password_hash,
                },
            )
            .await?;
            (user, true)
        }
    };

    if UserRoleRepo::assign(pool, user.id, master.id).await? {
        tracing::info!(user_id = user.id, "Granted master role to system user");
    }

    Ok(BootstrapReport {
        system_user_id: user.id,
        system_user_created: created,
    })
}
