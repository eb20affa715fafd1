//! Domain building blocks shared by the database and API crates.
//!
//! Nothing in here performs I/O: these are the error taxonomy, id and
//! timestamp aliases, role slugs, and the small business rules (limits,
//! id checks, slugs) that services compose.

pub mod error;
pub mod notifications;
pub mod roles;
pub mod slug;
pub mod types;
pub mod validation;
