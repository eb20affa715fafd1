//! Registration, login, token refresh and user profile management.

use jobboard_core::roles::{has_any_role, ADMIN_ROLES, ROLE_MASTER, ROLE_USER};
use jobboard_core::types::DbId;
use jobboard_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use jobboard_db::repositories::{RoleRepo, UserRepo, UserRoleRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::auth::jwt::{issue_token_pair, validate_token, TokenPair, TokenSubject, TokenType};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Emails are compared and stored lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Tokens plus the authenticated user, returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthSession {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: UserResponse,
}

#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Create an account holding the `user` role.
pub async fn register(state: &AppState, input: Registration) -> AppResult<UserResponse> {
    let pool = &state.pool;
    let email = normalize_email(&input.email);

    validate_password_strength(&input.password, state.config.password.min_length)
        .map_err(AppError::validation)?;

    if UserRepo::exists_by_email(pool, &email, None).await? {
        return Err(AppError::conflict(format!(
            "A user with email '{email}' already exists"
        )));
    }

    let password_hash = hash_password(&input.password, &state.config.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let role = RoleRepo::find_by_slug(pool, ROLE_USER)
        .await?
        .ok_or_else(|| AppError::InternalError("Role 'user' is missing".into()))?;

    let user = UserRepo::create_with_role(
        pool,
        &CreateUser {
            name: input.name.trim().to_string(),
            email,
            password_hash,
        },
        role.id,
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok(user.into_response(vec![ROLE_USER.to_string()]))
}

/// Authenticate with email + password and issue a token pair.
pub async fn login(state: &AppState, email: &str, password: &str) -> AppResult<AuthSession> {
    let pool = &state.pool;
    let email = normalize_email(email);

    let user = UserRepo::find_by_email(pool, &email)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    // Account state is only disclosed to callers holding the password.
    if !user.is_active {
        return Err(AppError::forbidden("Account is deactivated"));
    }

    let session = open_session(state, user).await?;
    tracing::info!(user_id = session.user.id, "User logged in");
    Ok(session)
}

/// Exchange a refresh token for a new pair. Roles are re-read from the
/// database, so role changes take effect on refresh.
pub async fn refresh(state: &AppState, refresh_token: &str) -> AppResult<AuthSession> {
    let claims = validate_token(refresh_token, TokenType::Refresh, &state.config.jwt)?;

    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

    if !user.is_active {
        return Err(AppError::forbidden("Account is deactivated"));
    }

    open_session(state, user).await
}

async fn open_session(state: &AppState, user: User) -> AppResult<AuthSession> {
    let roles = UserRoleRepo::slugs_for_user(&state.pool, user.id).await?;
    let tokens = issue_token_pair(
        TokenSubject {
            user_id: user.id,
            email: &user.email,
            name: &user.name,
            roles: &roles,
        },
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthSession {
        tokens,
        user: user.into_response(roles),
    })
}

/// The user behind a valid token. A token for a deleted user is a 401.
pub async fn current_user(pool: &PgPool, user: &AuthUser) -> AppResult<UserResponse> {
    let row = UserRepo::find_by_id(pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;
    with_roles(pool, row).await
}

pub async fn get_user(pool: &PgPool, id: DbId) -> AppResult<UserResponse> {
    let user = find_user(pool, id).await?;
    with_roles(pool, user).await
}

/// Lookup that maps a miss to 404.
pub async fn find_user(pool: &PgPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))
}

async fn with_roles(pool: &PgPool, user: User) -> AppResult<UserResponse> {
    let roles = UserRoleRepo::slugs_for_user(pool, user.id).await?;
    Ok(user.into_response(roles))
}

/// Users edit their own profile; only admins may change `is_active`, and
/// they may do so on any account.
pub async fn update_user(
    pool: &PgPool,
    actor: &AuthUser,
    id: DbId,
    mut input: UpdateUser,
) -> AppResult<UserResponse> {
    let is_admin = actor.has_any_role(&ADMIN_ROLES);
    find_user(pool, id).await?;

    if actor.user_id != id && !is_admin {
        return Err(AppError::forbidden("You can only update your own profile"));
    }
    if input.is_active.is_some() && !is_admin {
        return Err(AppError::forbidden("Only an admin can change account status"));
    }

    if let Some(email) = input.email.as_deref() {
        let email = normalize_email(email);
        if UserRepo::exists_by_email(pool, &email, Some(id)).await? {
            return Err(AppError::conflict(format!(
                "A user with email '{email}' already exists"
            )));
        }
        input.email = Some(email);
    }

    let user = UserRepo::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;
    with_roles(pool, user).await
}

/// Users delete themselves; admins delete anyone except a `master`.
pub async fn delete_user(pool: &PgPool, actor: &AuthUser, id: DbId) -> AppResult<()> {
    find_user(pool, id).await?;

    if actor.user_id != id && !actor.has_any_role(&ADMIN_ROLES) {
        return Err(AppError::forbidden("You can only delete your own account"));
    }
    let target_roles = UserRoleRepo::slugs_for_user(pool, id).await?;
    if has_any_role(&target_roles, &[ROLE_MASTER]) {
        return Err(AppError::forbidden("The system account cannot be deleted"));
    }

    if !UserRepo::delete(pool, id).await? {
        return Err(AppError::not_found("User", id));
    }
    tracing::info!(user_id = id, actor_id = actor.user_id, "User deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
    }
}
