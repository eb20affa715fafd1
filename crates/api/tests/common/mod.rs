#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::Algorithm;
use sqlx::PgPool;
use tower::ServiceExt;

use jobboard_api::auth::jwt::{issue_token_pair, JwtConfig, TokenSubject};
use jobboard_api::auth::password::{hash_password, PasswordConfig};
use jobboard_api::config::{DatabaseConfig, ServerConfig, SystemUserConfig};
use jobboard_api::router::build_app_router;
use jobboard_api::state::AppState;
use jobboard_core::roles::ROLE_USER;
use jobboard_core::types::DbId;
use jobboard_db::models::user::{CreateUser, User};
use jobboard_db::repositories::{RoleRepo, UserRepo, UserRoleRepo};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults and cheap password hashing.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        app_name: "jobboard-test".to_string(),
        database: DatabaseConfig {
            url: "postgres://localhost/jobboard_test".to_string(),
            max_connections: 5,
        },
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_mins: 30,
            refresh_token_expiry_days: 7,
        },
        password: PasswordConfig {
            min_length: 8,
            hash_rounds: 1,
            hash_memory_kib: 1024,
        },
        system_user: SystemUserConfig {
            email: "system@jobboard.local".to_string(),
            name: "System".to_string(),
            password: "system-password-for-tests".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A pool that never connects, for routes rejected before any query runs.
pub fn lazy_pool() -> PgPool {
    sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unused")
        .expect("lazy pool should build from a valid URL")
}

/// Ensure the system roles exist (normally done by the startup bootstrap).
pub async fn seed_roles(pool: &PgPool) {
    jobboard_api::bootstrap::run(pool, &test_config())
        .await
        .expect("bootstrap should succeed");
}

/// Create a user holding `roles` directly in the database.
pub async fn create_user(pool: &PgPool, email: &str, roles: &[&str]) -> User {
    let password_hash =
        hash_password(TEST_PASSWORD, &test_config().password).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: email.split('@').next().unwrap_or(email).to_string(),
            email: email.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed");

    for slug in roles.iter().copied().chain([ROLE_USER]) {
        let role = RoleRepo::find_by_slug(pool, slug)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("role {slug} should be seeded"));
        UserRoleRepo::assign(pool, user.id, role.id).await.unwrap();
    }
    user
}

/// A valid access token for `user` carrying `roles`.
pub fn token_for(user: &User, roles: &[&str]) -> String {
    let roles: Vec<String> = roles
        .iter()
        .copied()
        .chain([ROLE_USER])
        .map(str::to_string)
        .collect();
    issue_token_pair(
        TokenSubject {
            user_id: user.id,
            email: &user.email,
            name: &user.name,
            roles: &roles,
        },
        &test_config().jwt,
    )
    .expect("token issuance should succeed")
    .access_token
}

/// Send a request through the router and return the response.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, Method::DELETE, uri, token, None).await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the envelope body.
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    let actual = response.status();
    let json = body_json(response).await;
    assert_eq!(actual, status, "unexpected status, envelope: {json}");
    json
}

/// Read `body.id` from an envelope.
pub fn body_id(json: &serde_json::Value) -> DbId {
    json["body"]["id"].as_i64().expect("envelope body should carry an id")
}
