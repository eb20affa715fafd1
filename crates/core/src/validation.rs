//! Request-independent business rules checked by the service layer.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum number of media items attached to a single post.
pub const MAX_MEDIA_PER_POST: i64 = 10;

/// Accepted reaction kinds on posts.
pub const REACTION_KINDS: [&str; 5] = ["like", "love", "celebrate", "insightful", "support"];

/// Accepted media types.
pub const MEDIA_TYPES: [&str; 3] = ["image", "video", "document"];

/// Accepted proficiency levels for a user's skill.
pub const SKILL_LEVELS: [&str; 4] = ["beginner", "intermediate", "advanced", "expert"];

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Reject non-positive ids before touching the database.
pub fn ensure_valid_id(entity: &'static str, id: DbId) -> Result<DbId, CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "{entity} id must be a positive integer, got {id}"
        )));
    }
    Ok(id)
}

/// Raised when a post already holds [`MAX_MEDIA_PER_POST`] media items.
pub fn media_limit_reached() -> CoreError {
    CoreError::Conflict(format!(
        "A post cannot hold more than {MAX_MEDIA_PER_POST} media items"
    ))
}

pub fn ensure_reaction_kind(kind: &str) -> Result<(), CoreError> {
    ensure_one_of("reaction kind", kind, &REACTION_KINDS)
}

pub fn ensure_media_type(media_type: &str) -> Result<(), CoreError> {
    ensure_one_of("media type", media_type, &MEDIA_TYPES)
}

pub fn ensure_skill_level(level: &str) -> Result<(), CoreError> {
    ensure_one_of("skill level", level, &SKILL_LEVELS)
}

pub fn ensure_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Both bounds are optional; when both are present `min <= max`.
pub fn ensure_salary_range(min: Option<i64>, max: Option<i64>) -> Result<(), CoreError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(CoreError::Validation(format!(
                "salary_min ({min}) must not exceed salary_max ({max})"
            )));
        }
    }
    if min.is_some_and(|v| v < 0) || max.is_some_and(|v| v < 0) {
        return Err(CoreError::Validation(
            "Salary bounds must not be negative".into(),
        ));
    }
    Ok(())
}

/// Names become slugs, so they must contain at least one letter or digit.
pub fn ensure_sluggable(field: &str, slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation(format!(
            "{field} must contain at least one letter or digit"
        )));
    }
    Ok(())
}

fn ensure_one_of(what: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if !allowed.contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid {what} '{value}'. Expected one of: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}
