//! Startup bootstrap against a real database.

mod common;

use common::test_config;
use jobboard_api::bootstrap;
use jobboard_core::roles::{ROLE_MASTER, SYSTEM_ROLES};
use jobboard_db::repositories::{RoleRepo, UserRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_bootstrap_creates_system_user(pool: PgPool) {
    let config = test_config();
    let report = bootstrap::run(&pool, &config).await.unwrap();

    assert!(report.system_user_created);
    let user = UserRepo::find_by_email(&pool, &config.system_user.email)
        .await
        .unwrap()
        .expect("system user should exist");
    assert_eq!(user.id, report.system_user_id);
    assert_eq!(RoleRepo::list(&pool).await.unwrap().len(), SYSTEM_ROLES.len());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_second_bootstrap_changes_nothing(pool: PgPool) {
    let config = test_config();
    let first = bootstrap::run(&pool, &config).await.unwrap();
    let second = bootstrap::run(&pool, &config).await.unwrap();

    assert!(!second.system_user_created);
    assert_eq!(second.system_user_id, first.system_user_id);

    assert_eq!(
        UserRepo::count_by_email(&pool, &config.system_user.email)
            .await
            .unwrap(),
        1
    );
    assert_eq!(RoleRepo::list(&pool).await.unwrap().len(), SYSTEM_ROLES.len());

    let (master_grants,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM user_roles ur
         JOIN roles r ON r.id = ur.role_id
         WHERE ur.user_id = $1 AND r.slug = $2",
    )
    .bind(first.system_user_id)
    .bind(ROLE_MASTER)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(master_grants, 1);
}
