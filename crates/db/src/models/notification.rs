//! Notification entity model.

use serde::Serialize;
use sqlx::FromRow;

use moim_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
///
/// Created exclusively by the dispatcher; only the read flags are ever
/// mutated afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub member_id: DbId,
    /// One of `mention`, `post`, `event`, `agenda`.
    pub kind: String,
    pub title: String,
    pub message: String,
    /// The content item that caused this notification, if any.
    pub related_id: Option<DbId>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
