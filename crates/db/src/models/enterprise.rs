//! Enterprise entity model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `enterprises` table. Each user owns at most one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enterprise {
    pub id: DbId,
    /// Owning user.
    pub user_id: DbId,
    pub industry_id: Option<DbId>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateEnterprise {
    pub user_id: DbId,
    pub industry_id: Option<DbId>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEnterprise {
    pub industry_id: Option<DbId>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
}
