//! Notification model.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub actor_user_id: Option<DbId>,
    pub kind: String,
    pub message: String,
    pub source_entity_type: Option<String>,
    pub source_entity_id: Option<DbId>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// The part of a notification shared by every recipient of a fan-out.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub actor_user_id: Option<DbId>,
    pub kind: String,
    pub message: String,
    pub source_entity_type: Option<String>,
    pub source_entity_id: Option<DbId>,
}
