//! Vacancy (job posting) model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `vacancies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vacancy {
    pub id: DbId,
    pub enterprise_id: DbId,
    pub area_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub employment_type: Option<String>,
    pub work_model: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub is_open: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateVacancy {
    pub enterprise_id: DbId,
    pub area_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub employment_type: Option<String>,
    pub work_model: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateVacancy {
    pub area_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub employment_type: Option<String>,
    pub work_model: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub is_open: Option<bool>,
}
