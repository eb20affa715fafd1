//! Saved search model.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A vacancy search a user stored under a name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SavedSearch {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub query: String,
    /// Free-form filter object (area, work model, salary range, ...).
    pub filters: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateSavedSearch {
    pub user_id: DbId,
    pub name: String,
    pub query: String,
    pub filters: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSavedSearch {
    pub name: Option<String>,
    pub query: Option<String>,
    pub filters: Option<serde_json::Value>,
}
