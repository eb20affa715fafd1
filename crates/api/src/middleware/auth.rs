//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jobboard_core::types::DbId;

use crate::auth::jwt::{authorized_for_any, validate_bearer, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Any missing, malformed, expired or wrong-type token is a 401, including a
/// token whose subject is not a positive user id.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<ApiResponse<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(ApiResponse::ok(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub claims: Claims,
}

impl AuthUser {
    /// Whether the token carries any of the given role slugs.
    pub fn has_any_role(&self, required: &[&str]) -> bool {
        authorized_for_any(&self.claims, required)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let claims = validate_bearer(header, &state.config.jwt)?;

        Ok(AuthUser {
            user_id: claims.sub,
            claims,
        })
    }
}
