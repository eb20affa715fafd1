//! Post entity model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `posts` table.
///
/// A post with `enterprise_id` set is published on behalf of that enterprise;
/// `user_id` is always the author.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub user_id: DbId,
    pub enterprise_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreatePost {
    pub user_id: DbId,
    pub enterprise_id: Option<DbId>,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePost {
    pub content: Option<String>,
}
