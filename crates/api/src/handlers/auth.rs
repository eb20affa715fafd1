//! Handlers for the `/auth` resource (register, login, refresh, me).

use axum::extract::State;
use jobboard_db::models::user::UserResponse;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::accounts::{self, AuthSession, Registration};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account. A duplicate email is a 409.
pub async fn register(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<RegisterRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = accounts::register(
        &state,
        Registration {
            name: input.name,
            email: input.email,
            password: input.password,
        },
    )
    .await?;
    Ok(ApiResponse::created(user).message("User registered"))
}

/// POST /api/v1/auth/login
///
/// Exchange credentials for an access/refresh token pair.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<ApiResponse<AuthSession>> {
    let session = accounts::login(&state, &input.email, &input.password).await?;
    Ok(ApiResponse::ok(session).message("Logged in"))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a refresh token for a new token pair with up-to-date roles.
pub async fn refresh(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<RefreshRequest>,
) -> AppResult<ApiResponse<AuthSession>> {
    let session = accounts::refresh(&state, &input.refresh_token).await?;
    Ok(ApiResponse::ok(session).message("Token refreshed"))
}

/// GET /api/v1/auth/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<ApiResponse<UserResponse>> {
    let user = accounts::current_user(&state.pool, &auth).await?;
    Ok(ApiResponse::ok(user))
}
