//! Curriculum model (one per user).

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Curriculum {
    pub id: DbId,
    pub user_id: DbId,
    pub headline: String,
    pub summary: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateCurriculum {
    pub user_id: DbId,
    pub headline: String,
    pub summary: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCurriculum {
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}
