//! Industry catalog model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `industries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Industry {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateIndustry {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateIndustry {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}
