//! Skill catalog plus the two skill junctions (user skills, vacancy skills).

use jobboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateSkill {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

/// A row from the `user_skills` table (a skill the user claims).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSkill {
    pub id: DbId,
    pub user_id: DbId,
    pub skill_id: DbId,
    pub level: String,
    pub years_experience: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateUserSkill {
    pub user_id: DbId,
    pub skill_id: DbId,
    pub level: String,
    pub years_experience: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserSkill {
    pub level: Option<String>,
    pub years_experience: Option<i32>,
}

/// A skill attached to a vacancy, joined with the skill's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VacancySkill {
    pub vacancy_id: DbId,
    pub skill_id: DbId,
    pub name: String,
    pub slug: String,
    pub is_required: bool,
    pub created_at: Timestamp,
}
