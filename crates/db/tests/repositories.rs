//! Repository-layer tests against a real database: CRUD, unique
//! constraints, the no-self-follow check and notification fan-out.

use jobboard_db::models::area::CreateArea;
use jobboard_db::models::category::CreateCategory;
use jobboard_db::models::enterprise::CreateEnterprise;
use jobboard_db::models::industry::{CreateIndustry, UpdateIndustry};
use jobboard_db::models::media::CreateMedia;
use jobboard_db::models::notification::NewNotification;
use jobboard_db::models::post::CreatePost;
use jobboard_db::models::saved_search::CreateSavedSearch;
use jobboard_db::models::user::{CreateUser, User};
use jobboard_db::repositories::{
    AreaRepo, CategoryRepo, EnterpriseRepo, FollowRepo, IndustryRepo, MediaRepo, NotificationRepo,
    PostRepo, ReactionRepo, RoleRepo, SavedSearchRepo, UserRepo, UserRoleRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            name: email.split('@').next().unwrap().to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        },
    )
    .await
    .unwrap()
}

fn new_industry(name: &str, slug: &str) -> CreateIndustry {
    CreateIndustry {
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
    }
}

fn new_enterprise(user_id: i64, name: &str, slug: &str) -> CreateEnterprise {
    CreateEnterprise {
        user_id,
        industry_id: None,
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        website: None,
        email: None,
        phone: None,
        logo_url: None,
    }
}

fn constraint_of(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.constraint().map(str::to_string),
        _ => None,
    }
}

fn notification(actor_user_id: i64) -> NewNotification {
    NewNotification {
        actor_user_id: Some(actor_user_id),
        kind: "new_post".to_string(),
        message: "Ana published a new post".to_string(),
        source_entity_type: Some("post".to_string()),
        source_entity_id: Some(1),
    }
}

// ---------------------------------------------------------------------------
// Users and roles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_duplicate_email_violates_uq_users_email(pool: PgPool) {
    new_user(&pool, "ana@example.com").await;

    let err = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Other Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "x".into(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(constraint_of(&err).as_deref(), Some("uq_users_email"));
    assert_eq!(UserRepo::count_by_email(&pool, "ana@example.com").await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_role_ensure_is_idempotent(pool: PgPool) {
    let first = RoleRepo::ensure(&pool, "user", "User", "Regular account").await.unwrap();
    let second = RoleRepo::ensure(&pool, "user", "Renamed", "Changed").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.title, "User");
    assert_eq!(RoleRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_assign_and_revoke_role(pool: PgPool) {
    let user = new_user(&pool, "ana@example.com").await;
    let role = RoleRepo::ensure(&pool, "enterprise", "Enterprise", "").await.unwrap();

    assert!(UserRoleRepo::assign(&pool, user.id, role.id).await.unwrap());
    assert!(!UserRoleRepo::assign(&pool, user.id, role.id).await.unwrap());
    assert!(UserRoleRepo::has_role(&pool, user.id, role.id).await.unwrap());
    assert_eq!(
        UserRoleRepo::slugs_for_user(&pool, user.id).await.unwrap(),
        vec!["enterprise".to_string()]
    );

    assert!(UserRoleRepo::revoke(&pool, user.id, role.id).await.unwrap());
    assert!(!UserRoleRepo::revoke(&pool, user.id, role.id).await.unwrap());
    assert!(UserRoleRepo::slugs_for_user(&pool, user.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_with_role_assigns_role(pool: PgPool) {
    let role = RoleRepo::ensure(&pool, "user", "User", "").await.unwrap();
    let user = UserRepo::create_with_role(
        &pool,
        &CreateUser {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "x".into(),
        },
        role.id,
    )
    .await
    .unwrap();

    assert_eq!(
        UserRoleRepo::slugs_for_user(&pool, user.id).await.unwrap(),
        vec!["user".to_string()]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_with_missing_role_leaves_no_user(pool: PgPool) {
    let err = UserRepo::create_with_role(
        &pool,
        &CreateUser {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "x".into(),
        },
        9_999,
    )
    .await
    .unwrap_err();

    assert_eq!(constraint_of(&err).as_deref(), Some("user_roles_role_id_fkey"));
    assert_eq!(UserRepo::count_by_email(&pool, "ana@example.com").await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_industry_crud_and_toggle(pool: PgPool) {
    let industry = IndustryRepo::create(&pool, &new_industry("Fintech", "fintech"))
        .await
        .unwrap();
    assert!(industry.is_active);

    let toggled = IndustryRepo::toggle_active(&pool, industry.id).await.unwrap().unwrap();
    assert!(!toggled.is_active);
    assert!(IndustryRepo::list(&pool, false).await.unwrap().is_empty());
    assert_eq!(IndustryRepo::list(&pool, true).await.unwrap().len(), 1);

    let updated = IndustryRepo::update(
        &pool,
        industry.id,
        &UpdateIndustry {
            description: Some("Financial technology".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Fintech");
    assert_eq!(updated.description.as_deref(), Some("Financial technology"));

    assert!(IndustryRepo::delete(&pool, industry.id).await.unwrap());
    assert!(IndustryRepo::find_by_id(&pool, industry.id).await.unwrap().is_none());
    assert!(IndustryRepo::toggle_active(&pool, industry.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_industry_name_is_unique(pool: PgPool) {
    IndustryRepo::create(&pool, &new_industry("Fintech", "fintech"))
        .await
        .unwrap();
    let err = IndustryRepo::create(&pool, &new_industry("Fintech", "fintech-2"))
        .await
        .unwrap_err();

    assert_eq!(constraint_of(&err).as_deref(), Some("uq_industries_name"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_category_slug_is_unique_per_area(pool: PgPool) {
    let mut area_ids = Vec::new();
    for (name, slug) in [("Software", "software"), ("Design", "design")] {
        let area = AreaRepo::create(
            &pool,
            &CreateArea {
                name: name.into(),
                slug: slug.into(),
                description: None,
            },
        )
        .await
        .unwrap();
        area_ids.push(area.id);
    }
    let category = |area_id, name: &str| CreateCategory {
        area_id,
        name: name.to_string(),
        slug: "backend".to_string(),
        description: None,
    };

    CategoryRepo::create(&pool, &category(area_ids[0], "Backend")).await.unwrap();
    CategoryRepo::create(&pool, &category(area_ids[1], "Backend")).await.unwrap();

    let err = CategoryRepo::create(&pool, &category(area_ids[0], "Back-end"))
        .await
        .unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("uq_categories_area_slug"));
}

// ---------------------------------------------------------------------------
// Enterprises
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_one_enterprise_per_user(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    EnterpriseRepo::create(&pool, &new_enterprise(owner.id, "Acme", "acme"), None)
        .await
        .unwrap();

    let err = EnterpriseRepo::create(&pool, &new_enterprise(owner.id, "Globex", "globex"), None)
        .await
        .unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("uq_enterprises_user_id"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_enterprise_create_grants_owner_role(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let role = RoleRepo::ensure(&pool, "enterprise", "Enterprise", "").await.unwrap();

    EnterpriseRepo::create(&pool, &new_enterprise(owner.id, "Acme", "acme"), Some(role.id))
        .await
        .unwrap();
    assert!(UserRoleRepo::has_role(&pool, owner.id, role.id).await.unwrap());

    // A rejected second enterprise rolls back without touching the role set.
    EnterpriseRepo::create(&pool, &new_enterprise(owner.id, "Globex", "globex"), Some(role.id))
        .await
        .unwrap_err();
    assert_eq!(
        UserRoleRepo::slugs_for_user(&pool, owner.id).await.unwrap(),
        vec!["enterprise".to_string()]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_deleting_user_cascades_to_enterprise(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let enterprise = EnterpriseRepo::create(&pool, &new_enterprise(owner.id, "Acme", "acme"), None)
        .await
        .unwrap();

    assert!(UserRepo::delete(&pool, owner.id).await.unwrap());
    assert!(EnterpriseRepo::find_by_id(&pool, enterprise.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Follows and notifications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_self_follow_violates_check(pool: PgPool) {
    let user = new_user(&pool, "ana@example.com").await;

    let err = FollowRepo::follow_user(&pool, user.id, user.id)
        .await
        .unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("ck_user_follows_not_self"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_follow_twice_violates_pk(pool: PgPool) {
    let a = new_user(&pool, "a@example.com").await;
    let b = new_user(&pool, "b@example.com").await;

    FollowRepo::follow_user(&pool, a.id, b.id).await.unwrap();
    let err = FollowRepo::follow_user(&pool, a.id, b.id).await.unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("user_follows_pkey"));

    assert!(FollowRepo::is_following_user(&pool, a.id, b.id).await.unwrap());
    assert!(!FollowRepo::is_following_user(&pool, b.id, a.id).await.unwrap());

    let followers = FollowRepo::list_user_followers(&pool, b.id).await.unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].id, a.id);

    assert!(FollowRepo::unfollow_user(&pool, a.id, b.id).await.unwrap());
    assert!(!FollowRepo::unfollow_user(&pool, a.id, b.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_fan_out_reaches_followers_only(pool: PgPool) {
    let author = new_user(&pool, "author@example.com").await;
    let fan_a = new_user(&pool, "fan-a@example.com").await;
    let fan_b = new_user(&pool, "fan-b@example.com").await;
    let stranger = new_user(&pool, "stranger@example.com").await;
    FollowRepo::follow_user(&pool, fan_a.id, author.id).await.unwrap();
    FollowRepo::follow_user(&pool, fan_b.id, author.id).await.unwrap();

    let inserted = NotificationRepo::fan_out_to_user_followers(&pool, author.id, &notification(author.id))
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    assert_eq!(NotificationRepo::unread_count(&pool, fan_a.id).await.unwrap(), 1);
    assert_eq!(NotificationRepo::unread_count(&pool, stranger.id).await.unwrap(), 0);
    assert_eq!(NotificationRepo::unread_count(&pool, author.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_actor_is_never_notified(pool: PgPool) {
    let user = new_user(&pool, "ana@example.com").await;

    let created = NotificationRepo::create_for_user(&pool, user.id, &notification(user.id))
        .await
        .unwrap();
    assert!(created.is_none());
    assert!(NotificationRepo::list_for_user(&pool, user.id, false).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_mark_read_is_scoped_to_recipient(pool: PgPool) {
    let actor = new_user(&pool, "actor@example.com").await;
    let recipient = new_user(&pool, "recipient@example.com").await;

    let n = NotificationRepo::create_for_user(&pool, recipient.id, &notification(actor.id))
        .await
        .unwrap()
        .unwrap();
    assert!(!n.is_read);

    assert!(NotificationRepo::mark_read(&pool, n.id, actor.id).await.unwrap().is_none());

    let read = NotificationRepo::mark_read(&pool, n.id, recipient.id).await.unwrap().unwrap();
    assert!(read.is_read);
    assert!(read.read_at.is_some());
    assert_eq!(NotificationRepo::mark_all_read(&pool, recipient.id).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Posts and saved searches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_reaction_upsert_replaces_kind(pool: PgPool) {
    let user = new_user(&pool, "ana@example.com").await;
    let post = PostRepo::create(
        &pool,
        &CreatePost {
            user_id: user.id,
            enterprise_id: None,
            content: "Hello".into(),
        },
    )
    .await
    .unwrap();

    ReactionRepo::upsert(&pool, post.id, user.id, "like").await.unwrap();
    ReactionRepo::upsert(&pool, post.id, user.id, "love").await.unwrap();

    let counts = ReactionRepo::counts(&pool, post.id).await.unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].kind, "love");
    assert_eq!(counts[0].count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_media_insert_stops_at_limit(pool: PgPool) {
    let user = new_user(&pool, "ana@example.com").await;
    let post = PostRepo::create(
        &pool,
        &CreatePost {
            user_id: user.id,
            enterprise_id: None,
            content: "Gallery".into(),
        },
    )
    .await
    .unwrap();
    let media = |i: usize| CreateMedia {
        post_id: post.id,
        url: format!("https://cdn.example.com/{i}.png"),
        media_type: "image".to_string(),
        position: None,
    };

    for i in 0..3 {
        let item = MediaRepo::create_capped(&pool, &media(i), 3).await.unwrap();
        assert_eq!(item.map(|m| m.position), Some(i as i32));
    }
    assert!(MediaRepo::create_capped(&pool, &media(3), 3).await.unwrap().is_none());
    assert_eq!(MediaRepo::list_for_post(&pool, post.id).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_saved_search_scoped_by_owner(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let other = new_user(&pool, "other@example.com").await;

    let search = SavedSearchRepo::create(
        &pool,
        &CreateSavedSearch {
            user_id: owner.id,
            name: "Remote".into(),
            query: "rust".into(),
            filters: serde_json::json!({"work_model": "remote"}),
        },
    )
    .await
    .unwrap();
    assert_eq!(search.filters["work_model"], "remote");

    assert!(SavedSearchRepo::find_for_user(&pool, search.id, other.id).await.unwrap().is_none());
    assert!(!SavedSearchRepo::delete(&pool, search.id, other.id).await.unwrap());
    assert!(SavedSearchRepo::exists_by_name(&pool, owner.id, "Remote", None).await.unwrap());
    assert!(!SavedSearchRepo::exists_by_name(&pool, owner.id, "Remote", Some(search.id)).await.unwrap());
    assert!(SavedSearchRepo::delete(&pool, search.id, owner.id).await.unwrap());
}
