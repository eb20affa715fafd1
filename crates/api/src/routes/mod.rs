pub mod admin;
pub mod auth;
pub mod catalog;
pub mod enterprises;
pub mod health;
pub mod notifications;
pub mod posts;
pub mod profile;
pub mod users;
pub mod vacancies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/me                                         current user
///
/// /users/{id}                                      get, update, delete
/// /users/{id}/follow                               follow, unfollow
/// /users/{id}/followers                            list followers
/// /users/{id}/following                            list followed users
/// /users/{id}/posts                                list posts by user
/// /users/{id}/curriculum                           public curriculum
///
/// /roles                                           list (admin only)
/// /admin/users/{id}/roles                          role slugs (admin only)
/// /admin/users/{id}/roles/{slug}/toggle            toggle role (admin only)
///
/// /industries                                      list, create
/// /industries/{id}                                 get, update, delete
/// /industries/{id}/toggle-active                   flip is_active
/// /areas                                           list, create
/// /areas/{id}                                      get, update, delete
/// /areas/{id}/toggle-active                        flip is_active
/// /areas/{id}/categories                           list, create
/// /categories/{id}                                 get, update, delete
/// /skills                                          list, create
/// /skills/{id}                                     get, update, delete
///
/// /enterprises                                     list, create
/// /enterprises/{id}                                get, update, delete
/// /enterprises/{id}/address                        get, upsert
/// /enterprises/{id}/employees                      list, add
/// /enterprises/{id}/employees/{employee_id}        remove
/// /enterprises/{id}/reviews                        list, create
/// /enterprises/{id}/follow                         follow, unfollow
/// /enterprises/{id}/followers                      list followers
/// /enterprises/{id}/posts                          list posts by enterprise
/// /enterprises/{id}/vacancies                      list, create
/// /reviews/{id}                                    delete
///
/// /posts                                           list, create
/// /posts/{id}                                      get, update, delete
/// /posts/{id}/media                                list, add
/// /posts/{id}/reactions                            counts, react, remove
/// /posts/{id}/favorite                             favorite, unfavorite
/// /media/{id}                                      delete
///
/// /vacancies                                       list (?include_closed)
/// /vacancies/{id}                                  get, update, delete
/// /vacancies/{id}/skills                           list
/// /vacancies/{id}/skills/{skill_id}                upsert, remove
/// /vacancies/{id}/favorite                         favorite, unfavorite
///
/// /favorites/posts                                 caller's favorite posts
/// /favorites/vacancies                             caller's favorite vacancies
/// /me/skills                                       list, add
/// /me/skills/{id}                                  update, delete
/// /curriculums                                     create
/// /curriculums/me                                  get, update, delete
/// /saved-searches                                  list, create
/// /saved-searches/{id}                             get, update, delete
///
/// /notifications                                   list (?unread_only)
/// /notifications/read-all                          mark all read (POST)
/// /notifications/unread-count                      unread count (GET)
/// /notifications/{id}/read                         mark read (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        // Role management.
        .nest("/roles", admin::roles_router())
        .nest("/admin", admin::router())
        // Admin-managed catalogs.
        .nest("/industries", catalog::industries_router())
        .nest("/areas", catalog::areas_router())
        .nest("/categories", catalog::categories_router())
        .nest("/skills", catalog::skills_router())
        // Enterprises and their reviews.
        .nest("/enterprises", enterprises::router())
        .nest("/reviews", enterprises::reviews_router())
        // Posts and media.
        .nest("/posts", posts::router())
        .nest("/media", posts::media_router())
        .nest("/vacancies", vacancies::router())
        // Caller-scoped resources.
        .nest("/favorites", profile::favorites_router())
        .nest("/me", profile::me_router())
        .nest("/curriculums", profile::curriculums_router())
        .nest("/saved-searches", profile::saved_searches_router())
        .nest("/notifications", notifications::router())
}
