//! Post reaction model.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reactions` table. One reaction per user per post.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reaction {
    pub id: DbId,
    pub post_id: DbId,
    pub user_id: DbId,
    pub kind: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Aggregated reaction count per kind for a post.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReactionCount {
    pub kind: String,
    pub count: i64,
}
