//! Favorite junction rows for posts and vacancies.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavoritePost {
    pub user_id: DbId,
    pub post_id: DbId,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavoriteVacancy {
    pub user_id: DbId,
    pub vacancy_id: DbId,
    pub created_at: Timestamp,
}
