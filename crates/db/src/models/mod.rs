//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial patches

pub mod address;
pub mod area;
pub mod category;
pub mod curriculum;
pub mod employee;
pub mod enterprise;
pub mod favorite;
pub mod follow;
pub mod industry;
pub mod media;
pub mod notification;
pub mod post;
pub mod reaction;
pub mod review;
pub mod role;
pub mod saved_search;
pub mod skill;
pub mod user;
pub mod vacancy;
