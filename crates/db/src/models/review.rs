//! Enterprise review model.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reviews` table. One review per user per enterprise.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub enterprise_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub title: String,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateReview {
    pub enterprise_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub title: String,
    pub comment: Option<String>,
}
