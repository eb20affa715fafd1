//! Request middleware and authentication extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` or `master` role.
//! - [`request_path::capture_request_path`] -- Scopes the request path for the envelope.

pub mod auth;
pub mod rbac;
pub mod request_path;
