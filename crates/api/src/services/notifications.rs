//! Notification inbox and the inline fan-out triggered by follows, posts
//! and vacancies.
//!
//! Fan-out never fails the request that triggered it: a database error is
//! logged and swallowed. The actor is excluded from every recipient set.

use jobboard_core::notifications::{render_message, NotificationKind};
use jobboard_core::types::DbId;
use jobboard_db::models::enterprise::Enterprise;
use jobboard_db::models::notification::{NewNotification, Notification};
use jobboard_db::models::post::Post;
use jobboard_db::models::vacancy::Vacancy;
use jobboard_db::repositories::NotificationRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

fn new_notification(
    kind: NotificationKind,
    actor: &AuthUser,
    display_name: &str,
    subject: Option<&str>,
    source_id: DbId,
) -> NewNotification {
    NewNotification {
        actor_user_id: Some(actor.user_id),
        kind: kind.as_str().to_string(),
        message: render_message(kind, display_name, subject),
        source_entity_type: Some(kind.source_entity().to_string()),
        source_entity_id: Some(source_id),
    }
}

fn log_failure(kind: NotificationKind, source_id: DbId, err: &sqlx::Error) {
    tracing::warn!(%kind, source_id, error = %err, "Notification fan-out failed");
}

/// `actor` started following `followed_id`.
pub async fn user_followed(pool: &PgPool, actor: &AuthUser, followed_id: DbId) {
    let kind = NotificationKind::NewFollower;
    let input = new_notification(kind, actor, &actor.claims.name, None, actor.user_id);
    if let Err(e) = NotificationRepo::create_for_user(pool, followed_id, &input).await {
        log_failure(kind, actor.user_id, &e);
    }
}

/// `actor` started following `enterprise`; its owner is told.
pub async fn enterprise_followed(pool: &PgPool, actor: &AuthUser, enterprise: &Enterprise) {
    let kind = NotificationKind::NewFollower;
    let input = new_notification(
        kind,
        actor,
        &actor.claims.name,
        Some(&enterprise.name),
        actor.user_id,
    );
    if let Err(e) = NotificationRepo::create_for_user(pool, enterprise.user_id, &input).await {
        log_failure(kind, actor.user_id, &e);
    }
}

/// A new post notifies the author's followers, or the enterprise's
/// followers when published on behalf of an enterprise.
pub async fn post_published(
    pool: &PgPool,
    actor: &AuthUser,
    post: &Post,
    enterprise: Option<&Enterprise>,
) {
    let kind = NotificationKind::NewPost;
    let result = match enterprise {
        Some(enterprise) => {
            let input = new_notification(kind, actor, &enterprise.name, Some(&post.content), post.id);
            NotificationRepo::fan_out_to_enterprise_followers(pool, enterprise.id, &input).await
        }
        None => {
            let input =
                new_notification(kind, actor, &actor.claims.name, Some(&post.content), post.id);
            NotificationRepo::fan_out_to_user_followers(pool, post.user_id, &input).await
        }
    };
    match result {
        Ok(recipients) => tracing::debug!(post_id = post.id, recipients, "Post fan-out done"),
        Err(e) => log_failure(kind, post.id, &e),
    }
}

/// A new vacancy notifies the enterprise's followers.
pub async fn vacancy_opened(
    pool: &PgPool,
    actor: &AuthUser,
    enterprise: &Enterprise,
    vacancy: &Vacancy,
) {
    let kind = NotificationKind::NewVacancy;
    let input = new_notification(kind, actor, &enterprise.name, Some(&vacancy.title), vacancy.id);
    match NotificationRepo::fan_out_to_enterprise_followers(pool, enterprise.id, &input).await {
        Ok(recipients) => {
            tracing::debug!(vacancy_id = vacancy.id, recipients, "Vacancy fan-out done")
        }
        Err(e) => log_failure(kind, vacancy.id, &e),
    }
}

// ---------------------------------------------------------------------------
// Inbox
// ---------------------------------------------------------------------------

pub async fn list(pool: &PgPool, user_id: DbId, unread_only: bool) -> AppResult<Vec<Notification>> {
    Ok(NotificationRepo::list_for_user(pool, user_id, unread_only).await?)
}

pub async fn unread_count(pool: &PgPool, user_id: DbId) -> AppResult<i64> {
    Ok(NotificationRepo::unread_count(pool, user_id).await?)
}

/// Another user's notification is reported as missing.
pub async fn mark_read(pool: &PgPool, user_id: DbId, id: DbId) -> AppResult<Notification> {
    NotificationRepo::mark_read(pool, id, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Notification", id))
}

pub async fn mark_all_read(pool: &PgPool, user_id: DbId) -> AppResult<u64> {
    Ok(NotificationRepo::mark_all_read(pool, user_id).await?)
}
