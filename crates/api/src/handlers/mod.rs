//! HTTP handlers, one module per resource.
//!
//! Handlers parse and validate the request, delegate to [`crate::services`]
//! and wrap the outcome in an [`ApiResponse`](crate::response::ApiResponse).

pub mod auth;
pub mod catalog;
pub mod enterprises;
pub mod follows;
pub mod notifications;
pub mod posts;
pub mod profile;
pub mod roles;
pub mod users;
pub mod vacancies;
