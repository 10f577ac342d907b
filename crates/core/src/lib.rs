//! Pure domain logic for the moim portal.
//!
//! This crate has zero internal dependencies so the API/repository layer,
//! the notification dispatcher, and any future CLI tooling can all share
//! the same visibility rules, mention scanning, recipient resolution, and
//! calendar expansion without pulling in sqlx or axum.

pub mod attachments;
pub mod calendar;
pub mod content;
pub mod error;
pub mod mentions;
pub mod recipients;
pub mod roles;
pub mod types;
pub mod visibility;
