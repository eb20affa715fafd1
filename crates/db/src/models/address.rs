//! Enterprise address model.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `addresses` table (one per enterprise).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Address {
    pub id: DbId,
    pub enterprise_id: DbId,
    pub street: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub zipcode: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full replacement of an enterprise's address.
#[derive(Debug, Clone)]
pub struct UpsertAddress {
    pub street: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub zipcode: Option<String>,
}
