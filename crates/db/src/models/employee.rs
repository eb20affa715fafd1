//! Employee model: a user working at an enterprise.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub enterprise_id: DbId,
    pub user_id: DbId,
    pub position: String,
    pub started_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub enterprise_id: DbId,
    pub user_id: DbId,
    pub position: String,
    pub started_at: Option<Timestamp>,
}
