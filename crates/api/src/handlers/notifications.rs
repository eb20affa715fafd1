//! Handlers for the `/notifications` inbox.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::State;
use jobboard_db::models::notification::Notification;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{IdPath, Query};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::notifications;
use crate::state::AppState;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct MarkedRead {
    pub marked_read: u64,
}

/// GET /api/v1/notifications
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<ApiResponse<Vec<Notification>>> {
    let unread_only = params.unread_only.unwrap_or(false);
    let items = notifications::list(&state.pool, auth.user_id, unread_only).await?;
    Ok(ApiResponse::ok(items))
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<UnreadCount>> {
    let count = notifications::unread_count(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok(UnreadCount { count }))
}

/// POST /api/v1/notifications/{id}/read
///
/// 404 if the notification does not belong to the caller.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Notification>> {
    let notification = notifications::mark_read(&state.pool, auth.user_id, id).await?;
    Ok(ApiResponse::ok(notification).message("Notification marked as read"))
}

/// POST /api/v1/notifications/read-all
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<MarkedRead>> {
    let marked_read = notifications::mark_all_read(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok(MarkedRead { marked_read }))
}
