//! End-to-end flows through the full router against a real database.
//!
//! Each test gets a fresh database from `sqlx::test` with all migrations
//! applied. Run with `DATABASE_URL` set and `cargo test -- --ignored`.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_id, build_test_app, create_user, delete, expect_status, get, post_json, seed_roles, send,
    token_for, TEST_PASSWORD,
};
use jobboard_core::roles::{ROLE_ADMIN, ROLE_ENTERPRISE, ROLE_MASTER};
use jobboard_db::models::user::UpdateUser;
use jobboard_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn register_login_and_me(pool: PgPool) {
    seed_roles(&pool).await;

    let body = json!({"name": "Ana", "email": "Ana@Example.com", "password": TEST_PASSWORD});
    let json = expect_status(
        post_json(build_test_app(pool.clone()), "/api/v1/auth/register", None, body).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(json["code"], "CREATED");
    assert_eq!(json["body"]["email"], "ana@example.com");
    assert!(json["body"].get("password_hash").is_none());

    let login = json!({"email": "ana@example.com", "password": TEST_PASSWORD});
    let json = expect_status(
        post_json(build_test_app(pool.clone()), "/api/v1/auth/login", None, login).await,
        StatusCode::OK,
    )
    .await;
    let token = json["body"]["access_token"].as_str().unwrap().to_string();
    assert!(json["body"]["refresh_token"].is_string());

    let json = expect_status(
        get(build_test_app(pool), "/api/v1/auth/me", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["body"]["name"], "Ana");
    assert_eq!(json["path"], "/api/v1/auth/me");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn duplicate_email_is_conflict(pool: PgPool) {
    seed_roles(&pool).await;
    let body = json!({"name": "Ana", "email": "ana@example.com", "password": TEST_PASSWORD});

    expect_status(
        post_json(build_test_app(pool.clone()), "/api/v1/auth/register", None, body.clone()).await,
        StatusCode::CREATED,
    )
    .await;
    let json = expect_status(
        post_json(build_test_app(pool.clone()), "/api/v1/auth/register", None, body).await,
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(json["code"], "CONFLICT");

    assert_eq!(UserRepo::count_by_email(&pool, "ana@example.com").await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn wrong_password_is_401(pool: PgPool) {
    seed_roles(&pool).await;
    create_user(&pool, "ana@example.com", &[]).await;

    let login = json!({"email": "ana@example.com", "password": "not-the-password"});
    expect_status(
        post_json(build_test_app(pool), "/api/v1/auth/login", None, login).await,
        StatusCode::UNAUTHORIZED,
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn inactive_account_is_only_disclosed_with_the_right_password(pool: PgPool) {
    seed_roles(&pool).await;
    let user = create_user(&pool, "ana@example.com", &[]).await;
    UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let wrong = json!({"email": "ana@example.com", "password": "not-the-password"});
    let json = expect_status(
        post_json(build_test_app(pool.clone()), "/api/v1/auth/login", None, wrong).await,
        StatusCode::UNAUTHORIZED,
    )
    .await;
    assert_eq!(json["message"], "Invalid email or password");

    let right = json!({"email": "ana@example.com", "password": TEST_PASSWORD});
    expect_status(
        post_json(build_test_app(pool), "/api/v1/auth/login", None, right).await,
        StatusCode::FORBIDDEN,
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn user_patch_is_limited_to_self_or_admin(pool: PgPool) {
    seed_roles(&pool).await;
    let ana = create_user(&pool, "ana@example.com", &[]).await;
    let bob = create_user(&pool, "bob@example.com", &[]).await;
    let admin = create_user(&pool, "admin@example.com", &[ROLE_ADMIN]).await;
    let uri = format!("/api/v1/users/{}", ana.id);
    let patch = |token: String, body: serde_json::Value| {
        let app = build_test_app(pool.clone());
        let uri = uri.clone();
        async move { send(app, Method::PATCH, &uri, Some(&token), Some(body)).await }
    };

    let own = expect_status(
        patch(token_for(&ana, &[]), json!({"bio": "Rustacean"})).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(own["body"]["bio"], "Rustacean");

    expect_status(
        patch(token_for(&ana, &[]), json!({"is_active": false})).await,
        StatusCode::FORBIDDEN,
    )
    .await;
    expect_status(
        patch(token_for(&bob, &[]), json!({"bio": "hijacked"})).await,
        StatusCode::FORBIDDEN,
    )
    .await;

    let by_admin = expect_status(
        patch(token_for(&admin, &[ROLE_ADMIN]), json!({"is_active": false})).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(by_admin["body"]["is_active"], false);
    assert_eq!(by_admin["body"]["bio"], "Rustacean");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn industry_toggle_twice_restores_state(pool: PgPool) {
    seed_roles(&pool).await;
    let admin = create_user(&pool, "admin@example.com", &[ROLE_ADMIN]).await;
    let token = token_for(&admin, &[ROLE_ADMIN]);

    let created = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/industries",
            Some(&token),
            json!({"name": "Software Development"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = body_id(&created);
    assert_eq!(created["body"]["is_active"], true);
    assert_eq!(created["body"]["slug"], "software-development");

    let uri = format!("/api/v1/industries/{id}/toggle-active");
    let first = expect_status(
        send(build_test_app(pool.clone()), Method::PATCH, &uri, Some(&token), None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(first["body"]["is_active"], false);

    let second = expect_status(
        send(build_test_app(pool), Method::PATCH, &uri, Some(&token), None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(second["body"]["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn duplicate_catalog_name_is_conflict(pool: PgPool) {
    seed_roles(&pool).await;
    let admin = create_user(&pool, "admin@example.com", &[ROLE_ADMIN]).await;
    let token = token_for(&admin, &[ROLE_ADMIN]);

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        expect_status(
            post_json(
                build_test_app(pool.clone()),
                "/api/v1/skills",
                Some(&token),
                json!({"name": "Rust"}),
            )
            .await,
            expected,
        )
        .await;
    }
}

/// Create an area and return its id.
async fn create_area(pool: &PgPool, token: &str, name: &str) -> i64 {
    let json = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/areas",
            Some(token),
            json!({"name": name}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    body_id(&json)
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn category_names_are_scoped_to_their_area(pool: PgPool) {
    seed_roles(&pool).await;
    let admin = create_user(&pool, "admin@example.com", &[ROLE_ADMIN]).await;
    let token = token_for(&admin, &[ROLE_ADMIN]);

    let data_science = create_area(&pool, &token, "Data Science").await;
    let data = create_area(&pool, &token, "Data").await;
    let software = create_area(&pool, &token, "Software").await;

    for (area_id, name) in [
        (data_science, "Ops"),
        (data, "Science Ops"),
        (data_science, "Backend"),
        (software, "Backend"),
    ] {
        expect_status(
            post_json(
                build_test_app(pool.clone()),
                &format!("/api/v1/areas/{area_id}/categories"),
                Some(&token),
                json!({"name": name}),
            )
            .await,
            StatusCode::CREATED,
        )
        .await;
    }

    expect_status(
        post_json(
            build_test_app(pool),
            &format!("/api/v1/areas/{software}/categories"),
            Some(&token),
            json!({"name": "BACKEND"}),
        )
        .await,
        StatusCode::CONFLICT,
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn renamed_area_name_can_be_reused_with_same_categories(pool: PgPool) {
    seed_roles(&pool).await;
    let admin = create_user(&pool, "admin@example.com", &[ROLE_ADMIN]).await;
    let token = token_for(&admin, &[ROLE_ADMIN]);

    let original = create_area(&pool, &token, "Software").await;
    let categories = format!("/api/v1/areas/{original}/categories");
    expect_status(
        post_json(build_test_app(pool.clone()), &categories, Some(&token), json!({"name": "Backend"}))
            .await,
        StatusCode::CREATED,
    )
    .await;

    expect_status(
        send(
            build_test_app(pool.clone()),
            Method::PATCH,
            &format!("/api/v1/areas/{original}"),
            Some(&token),
            Some(json!({"name": "Engineering"})),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let reused = create_area(&pool, &token, "Software").await;
    let json = expect_status(
        post_json(
            build_test_app(pool),
            &format!("/api/v1/areas/{reused}/categories"),
            Some(&token),
            json!({"name": "Backend"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(json["body"]["slug"], "backend");
    assert_eq!(json["body"]["area_id"], reused);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn eleventh_media_item_is_rejected(pool: PgPool) {
    seed_roles(&pool).await;
    let author = create_user(&pool, "author@example.com", &[]).await;
    let token = token_for(&author, &[]);

    let post = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/posts",
            Some(&token),
            json!({"content": "Our new office"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/v1/posts/{}/media", body_id(&post));

    for i in 0..10 {
        let media = json!({"url": format!("https://cdn.example.com/{i}.png"), "media_type": "image"});
        expect_status(
            post_json(build_test_app(pool.clone()), &uri, Some(&token), media).await,
            StatusCode::CREATED,
        )
        .await;
    }

    let media = json!({"url": "https://cdn.example.com/10.png", "media_type": "image"});
    let json = expect_status(
        post_json(build_test_app(pool.clone()), &uri, Some(&token), media).await,
        StatusCode::CONFLICT,
    )
    .await;
    assert!(json["message"].as_str().unwrap().contains("10"));

    let list = expect_status(get(build_test_app(pool), &uri, None).await, StatusCode::OK).await;
    assert_eq!(list["body"].as_array().unwrap().len(), 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn deleting_another_users_post_is_forbidden(pool: PgPool) {
    seed_roles(&pool).await;
    let author = create_user(&pool, "author@example.com", &[]).await;
    let other = create_user(&pool, "other@example.com", &[]).await;

    let post = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/posts",
            Some(&token_for(&author, &[])),
            json!({"content": "Hello"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/v1/posts/{}", body_id(&post));

    expect_status(
        delete(build_test_app(pool.clone()), &uri, Some(&token_for(&other, &[]))).await,
        StatusCode::FORBIDDEN,
    )
    .await;

    let json = expect_status(
        delete(build_test_app(pool.clone()), &uri, Some(&token_for(&author, &[]))).await,
        StatusCode::OK,
    )
    .await;
    assert!(json["body"].is_null());
    assert_eq!(json["message"], "Post deleted");

    expect_status(get(build_test_app(pool), &uri, None).await, StatusCode::NOT_FOUND).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn saved_searches_are_private(pool: PgPool) {
    seed_roles(&pool).await;
    let owner = create_user(&pool, "owner@example.com", &[]).await;
    let other = create_user(&pool, "other@example.com", &[]).await;

    let created = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/saved-searches",
            Some(&token_for(&owner, &[])),
            json!({"name": "Remote Rust", "query": "rust", "filters": {"work_model": "remote"}}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/v1/saved-searches/{}", body_id(&created));

    let json = expect_status(
        get(build_test_app(pool.clone()), &uri, Some(&token_for(&owner, &[]))).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["body"]["name"], "Remote Rust");
    assert_eq!(json["body"]["query"], "rust");
    assert_eq!(json["body"]["filters"]["work_model"], "remote");

    expect_status(
        get(build_test_app(pool.clone()), &uri, Some(&token_for(&other, &[]))).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    expect_status(
        delete(build_test_app(pool), &uri, Some(&token_for(&other, &[]))).await,
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn role_toggle_round_trip(pool: PgPool) {
    seed_roles(&pool).await;
    let admin = create_user(&pool, "admin@example.com", &[ROLE_ADMIN]).await;
    let target = create_user(&pool, "target@example.com", &[]).await;
    let token = token_for(&admin, &[ROLE_ADMIN]);
    let roles_uri = format!("/api/v1/admin/users/{}/roles", target.id);

    let before = expect_status(
        get(build_test_app(pool.clone()), &roles_uri, Some(&token)).await,
        StatusCode::OK,
    )
    .await;

    let toggle_uri = format!("{roles_uri}/{ROLE_ENTERPRISE}/toggle");
    let granted = expect_status(
        send(build_test_app(pool.clone()), Method::POST, &toggle_uri, Some(&token), None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(granted["body"]["assigned"], true);
    assert_eq!(granted["message"], "Role 'enterprise' granted");

    let revoked = expect_status(
        send(build_test_app(pool.clone()), Method::POST, &toggle_uri, Some(&token), None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(revoked["body"]["assigned"], false);

    let after = expect_status(
        get(build_test_app(pool.clone()), &roles_uri, Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(before["body"], after["body"]);

    let master_uri = format!("{roles_uri}/{ROLE_MASTER}/toggle");
    expect_status(
        send(build_test_app(pool.clone()), Method::POST, &master_uri, Some(&token), None).await,
        StatusCode::FORBIDDEN,
    )
    .await;

    let unknown_uri = format!("{roles_uri}/wizard/toggle");
    expect_status(
        send(build_test_app(pool), Method::POST, &unknown_uri, Some(&token), None).await,
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn follow_and_post_fan_out_notifications(pool: PgPool) {
    seed_roles(&pool).await;
    let author = create_user(&pool, "author@example.com", &[]).await;
    let fan = create_user(&pool, "fan@example.com", &[]).await;
    let author_token = token_for(&author, &[]);
    let fan_token = token_for(&fan, &[]);

    expect_status(
        send(
            build_test_app(pool.clone()),
            Method::POST,
            &format!("/api/v1/users/{}/follow", author.id),
            Some(&fan_token),
            None,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let inbox = expect_status(
        get(build_test_app(pool.clone()), "/api/v1/notifications", Some(&author_token)).await,
        StatusCode::OK,
    )
    .await;
    let items = inbox["body"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "new_follower");
    assert_eq!(items[0]["actor_user_id"], fan.id);

    expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/posts",
            Some(&author_token),
            json!({"content": "We are hiring"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let inbox = expect_status(
        get(build_test_app(pool.clone()), "/api/v1/notifications", Some(&fan_token)).await,
        StatusCode::OK,
    )
    .await;
    let items = inbox["body"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "new_post");
    assert!(items[0]["message"].as_str().unwrap().contains("We are hiring"));

    // The author is never notified of their own post.
    let count = expect_status(
        get(build_test_app(pool.clone()), "/api/v1/notifications/unread-count", Some(&author_token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(count["body"]["count"], 1);

    let read_all = expect_status(
        send(
            build_test_app(pool.clone()),
            Method::POST,
            "/api/v1/notifications/read-all",
            Some(&fan_token),
            None,
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(read_all["body"]["marked_read"], 1);

    let count = expect_status(
        get(build_test_app(pool), "/api/v1/notifications/unread-count", Some(&fan_token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(count["body"]["count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn self_follow_is_rejected(pool: PgPool) {
    seed_roles(&pool).await;
    let user = create_user(&pool, "ana@example.com", &[]).await;

    expect_status(
        send(
            build_test_app(pool),
            Method::POST,
            &format!("/api/v1/users/{}/follow", user.id),
            Some(&token_for(&user, &[])),
            None,
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn vacancy_round_trip_and_follower_notification(pool: PgPool) {
    seed_roles(&pool).await;
    let owner = create_user(&pool, "owner@example.com", &[]).await;
    let follower = create_user(&pool, "follower@example.com", &[]).await;
    let owner_token = token_for(&owner, &[]);

    let enterprise = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/enterprises",
            Some(&owner_token),
            json!({"name": "Acme Corp"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let enterprise_id = body_id(&enterprise);
    assert_eq!(enterprise["body"]["slug"], "acme-corp");

    expect_status(
        send(
            build_test_app(pool.clone()),
            Method::POST,
            &format!("/api/v1/enterprises/{enterprise_id}/follow"),
            Some(&token_for(&follower, &[])),
            None,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let vacancy_body = json!({
        "title": "Backend Engineer",
        "description": "Build APIs",
        "work_model": "remote",
        "salary_min": 3000,
        "salary_max": 5000,
    });
    let vacancies_uri = format!("/api/v1/enterprises/{enterprise_id}/vacancies");
    let created = expect_status(
        post_json(build_test_app(pool.clone()), &vacancies_uri, Some(&owner_token), vacancy_body).await,
        StatusCode::CREATED,
    )
    .await;

    let fetched = expect_status(
        get(build_test_app(pool.clone()), &format!("/api/v1/vacancies/{}", body_id(&created)), None).await,
        StatusCode::OK,
    )
    .await;
    for field in ["title", "description", "work_model", "salary_min", "salary_max"] {
        assert_eq!(fetched["body"][field], created["body"][field], "field {field}");
    }

    // Inverted salary range is a validation error.
    expect_status(
        post_json(
            build_test_app(pool.clone()),
            &vacancies_uri,
            Some(&owner_token),
            json!({"title": "Bad", "description": "x", "salary_min": 9000, "salary_max": 1000}),
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;

    let inbox = expect_status(
        get(build_test_app(pool), "/api/v1/notifications", Some(&token_for(&follower, &[]))).await,
        StatusCode::OK,
    )
    .await;
    let kinds: Vec<_> = inbox["body"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["new_vacancy".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn second_enterprise_for_same_user_is_conflict(pool: PgPool) {
    seed_roles(&pool).await;
    let owner = create_user(&pool, "owner@example.com", &[]).await;
    let token = token_for(&owner, &[]);

    for (name, expected) in [("Acme", StatusCode::CREATED), ("Other", StatusCode::CONFLICT)] {
        expect_status(
            post_json(
                build_test_app(pool.clone()),
                "/api/v1/enterprises",
                Some(&token),
                json!({"name": name}),
            )
            .await,
            expected,
        )
        .await;
    }
}
