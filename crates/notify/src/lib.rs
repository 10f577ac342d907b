//! Notification fan-out infrastructure.
//!
//! This crate turns one publish event into per-recipient notification
//! records and best-effort emails:
//!
//! - [`NotificationDispatcher`] -- resolves recipients and runs the
//!   persist-then-email pair for each one, with failures isolated per
//!   recipient.
//! - [`email`] -- SMTP delivery via `lettre`; an unconfigured SMTP host is
//!   a valid disabled state, not an error.
//! - [`templates`] -- notification and email wording.

pub mod dispatcher;
pub mod email;
pub mod templates;

pub use dispatcher::{NotificationDispatcher, Publication};
pub use email::{EmailConfig, EmailError, Mailer, SmtpMailer};
