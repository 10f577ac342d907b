//! Request handlers, one submodule per resource.
//!
//! Handlers stay thin: they authenticate, delegate to a repository in
//! `moim_db`, apply the visibility rules from `moim_core`, and map errors
//! via [`AppError`](crate::error::AppError). Publish endpoints additionally
//! hand the created item to the notification dispatcher.

pub mod agenda;
pub mod auth;
pub mod calendar;
pub mod member;
pub mod notification;
pub mod post;
