//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod agenda;
pub mod calendar_event;
pub mod member;
pub mod notification;
pub mod post;
