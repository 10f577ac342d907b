//! Authentication middleware extractors.
//!
//! - [`auth::AuthMember`] -- Requires a valid JWT Bearer token and an active
//!   member row.
//! - [`auth::MaybeAuthMember`] -- Optional variant for endpoints that serve
//!   anonymous viewers a reduced view instead of rejecting them.

pub mod auth;
