//! Follow junction rows.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// `follower_id` follows `followed_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserFollow {
    pub follower_id: DbId,
    pub followed_id: DbId,
    pub created_at: Timestamp,
}

/// `user_id` follows `enterprise_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnterpriseFollow {
    pub user_id: DbId,
    pub enterprise_id: DbId,
    pub created_at: Timestamp,
}
