//! Media attached to posts.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub post_id: DbId,
    pub url: String,
    pub media_type: String,
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateMedia {
    pub post_id: DbId,
    pub url: String,
    pub media_type: String,
    pub position: Option<i32>,
}
