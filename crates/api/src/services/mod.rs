//! Business rules between handlers and repositories.
//!
//! Each service validates ids, looks entities up, checks ownership and
//! conflicts, then mutates through the repositories. Services return
//! [`AppResult`](crate::error::AppResult) so handlers only wrap the outcome
//! in the response envelope.

pub mod accounts;
pub mod catalog;
pub mod enterprises;
pub mod follows;
pub mod notifications;
pub mod posts;
pub mod profile;
pub mod roles;
pub mod vacancies;
