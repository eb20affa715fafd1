//! Admin-managed catalogs: industries, areas, categories and skills.
//!
//! Names are unique per catalog and slugs are derived from names, so a
//! rename recomputes the slug and re-runs the conflict check. Categories are
//! scoped to their area: name and slug only need to be unique within it.

use jobboard_core::slug::slugify;
use jobboard_core::types::DbId;
use jobboard_core::validation::ensure_sluggable;
use jobboard_db::models::area::{Area, CreateArea, UpdateArea};
use jobboard_db::models::category::{Category, CreateCategory, UpdateCategory};
use jobboard_db::models::industry::{CreateIndustry, Industry, UpdateIndustry};
use jobboard_db::models::skill::{CreateSkill, Skill, UpdateSkill};
use jobboard_db::repositories::{AreaRepo, CategoryRepo, IndustryRepo, SkillRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Fields shared by every catalog create request.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub name: String,
    pub description: Option<String>,
}

/// Partial update of a catalog entry.
#[derive(Debug, Clone, Default)]
pub struct CatalogPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Trimmed name and its slug, rejecting names without letters or digits.
fn name_and_slug(name: &str) -> AppResult<(String, String)> {
    let name = name.trim().to_string();
    let slug = slugify(&name);
    ensure_sluggable("name", &slug)?;
    Ok((name, slug))
}

fn duplicate(entity: &str, name: &str) -> AppError {
    AppError::conflict(format!("{entity} with name '{name}' already exists"))
}

// ---------------------------------------------------------------------------
// Industries
// ---------------------------------------------------------------------------

pub async fn list_industries(pool: &PgPool, include_inactive: bool) -> AppResult<Vec<Industry>> {
    Ok(IndustryRepo::list(pool, include_inactive).await?)
}

pub async fn get_industry(pool: &PgPool, id: DbId) -> AppResult<Industry> {
    IndustryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Industry", id))
}

pub async fn create_industry(pool: &PgPool, input: CatalogEntry) -> AppResult<Industry> {
    let (name, slug) = name_and_slug(&input.name)?;
    if IndustryRepo::exists_by_name(pool, &name, &slug, None).await? {
        return Err(duplicate("Industry", &name));
    }
    let industry = IndustryRepo::create(
        pool,
        &CreateIndustry {
            name,
            slug,
            description: input.description,
        },
    )
    .await?;
    tracing::info!(industry_id = industry.id, "Industry created");
    Ok(industry)
}

pub async fn update_industry(pool: &PgPool, id: DbId, input: CatalogPatch) -> AppResult<Industry> {
    get_industry(pool, id).await?;
    let mut update = UpdateIndustry {
        description: input.description,
        ..Default::default()
    };
    if let Some(name) = input.name.as_deref() {
        let (name, slug) = name_and_slug(name)?;
        if IndustryRepo::exists_by_name(pool, &name, &slug, Some(id)).await? {
            return Err(duplicate("Industry", &name));
        }
        update.name = Some(name);
        update.slug = Some(slug);
    }
    IndustryRepo::update(pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Industry", id))
}

/// Flip `is_active`; applying it twice restores the original value.
pub async fn toggle_industry(pool: &PgPool, id: DbId) -> AppResult<Industry> {
    let industry = IndustryRepo::toggle_active(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Industry", id))?;
    tracing::info!(industry_id = id, is_active = industry.is_active, "Industry toggled");
    Ok(industry)
}

pub async fn delete_industry(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !IndustryRepo::delete(pool, id).await? {
        return Err(AppError::not_found("Industry", id));
    }
    tracing::info!(industry_id = id, "Industry deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Areas
// ---------------------------------------------------------------------------

pub async fn list_areas(pool: &PgPool, include_inactive: bool) -> AppResult<Vec<Area>> {
    Ok(AreaRepo::list(pool, include_inactive).await?)
}

pub async fn get_area(pool: &PgPool, id: DbId) -> AppResult<Area> {
    AreaRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Area", id))
}

pub async fn create_area(pool: &PgPool, input: CatalogEntry) -> AppResult<Area> {
    let (name, slug) = name_and_slug(&input.name)?;
    if AreaRepo::exists_by_name(pool, &name, &slug, None).await? {
        return Err(duplicate("Area", &name));
    }
    let area = AreaRepo::create(
        pool,
        &CreateArea {
            name,
            slug,
            description: input.description,
        },
    )
    .await?;
    tracing::info!(area_id = area.id, "Area created");
    Ok(area)
}

pub async fn update_area(pool: &PgPool, id: DbId, input: CatalogPatch) -> AppResult<Area> {
    get_area(pool, id).await?;
    let mut update = UpdateArea {
        description: input.description,
        ..Default::default()
    };
    if let Some(name) = input.name.as_deref() {
        let (name, slug) = name_and_slug(name)?;
        if AreaRepo::exists_by_name(pool, &name, &slug, Some(id)).await? {
            return Err(duplicate("Area", &name));
        }
        update.name = Some(name);
        update.slug = Some(slug);
    }
    AreaRepo::update(pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Area", id))
}

pub async fn toggle_area(pool: &PgPool, id: DbId) -> AppResult<Area> {
    let area = AreaRepo::toggle_active(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Area", id))?;
    tracing::info!(area_id = id, is_active = area.is_active, "Area toggled");
    Ok(area)
}

pub async fn delete_area(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !AreaRepo::delete(pool, id).await? {
        return Err(AppError::not_found("Area", id));
    }
    tracing::info!(area_id = id, "Area deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub async fn list_categories(pool: &PgPool, area_id: DbId) -> AppResult<Vec<Category>> {
    get_area(pool, area_id).await?;
    Ok(CategoryRepo::list_by_area(pool, area_id).await?)
}

pub async fn get_category(pool: &PgPool, id: DbId) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))
}

pub async fn create_category(
    pool: &PgPool,
    area_id: DbId,
    input: CatalogEntry,
) -> AppResult<Category> {
    get_area(pool, area_id).await?;
    let (name, slug) = name_and_slug(&input.name)?;
    if CategoryRepo::exists_by_name(pool, area_id, &name, &slug, None).await? {
        return Err(duplicate("Category", &name));
    }
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            area_id,
            name,
            slug,
            description: input.description,
        },
    )
    .await?;
    tracing::info!(category_id = category.id, area_id, "Category created");
    Ok(category)
}

pub async fn update_category(pool: &PgPool, id: DbId, input: CatalogPatch) -> AppResult<Category> {
    let category = get_category(pool, id).await?;
    let mut update = UpdateCategory {
        description: input.description,
        ..Default::default()
    };
    if let Some(name) = input.name.as_deref() {
        let (name, slug) = name_and_slug(name)?;
        if CategoryRepo::exists_by_name(pool, category.area_id, &name, &slug, Some(id)).await? {
            return Err(duplicate("Category", &name));
        }
        update.name = Some(name);
        update.slug = Some(slug);
    }
    CategoryRepo::update(pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))
}

pub async fn delete_category(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !CategoryRepo::delete(pool, id).await? {
        return Err(AppError::not_found("Category", id));
    }
    tracing::info!(category_id = id, "Category deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

pub async fn list_skills(pool: &PgPool) -> AppResult<Vec<Skill>> {
    Ok(SkillRepo::list(pool).await?)
}

pub async fn get_skill(pool: &PgPool, id: DbId) -> AppResult<Skill> {
    SkillRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Skill", id))
}

pub async fn create_skill(pool: &PgPool, input: CatalogEntry) -> AppResult<Skill> {
    let (name, slug) = name_and_slug(&input.name)?;
    if SkillRepo::exists_by_name(pool, &name, &slug, None).await? {
        return Err(duplicate("Skill", &name));
    }
    let skill = SkillRepo::create(
        pool,
        &CreateSkill {
            name,
            slug,
            description: input.description,
        },
    )
    .await?;
    tracing::info!(skill_id = skill.id, "Skill created");
    Ok(skill)
}

pub async fn update_skill(pool: &PgPool, id: DbId, input: CatalogPatch) -> AppResult<Skill> {
    get_skill(pool, id).await?;
    let mut update = UpdateSkill {
        description: input.description,
        ..Default::default()
    };
    if let Some(name) = input.name.as_deref() {
        let (name, slug) = name_and_slug(name)?;
        if SkillRepo::exists_by_name(pool, &name, &slug, Some(id)).await? {
            return Err(duplicate("Skill", &name));
        }
        update.name = Some(name);
        update.slug = Some(slug);
    }
    SkillRepo::update(pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Skill", id))
}

pub async fn delete_skill(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !SkillRepo::delete(pool, id).await? {
        return Err(AppError::not_found("Skill", id));
    }
    tracing::info!(skill_id = id, "Skill deleted");
    Ok(())
}
