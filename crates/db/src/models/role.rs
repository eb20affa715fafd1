//! Role entity model.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub is_immutable: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
