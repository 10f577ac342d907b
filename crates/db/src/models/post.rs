//! Post entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use moim_core::attachments::{Attachment, RawAttachment};
use moim_core::types::{DbId, Timestamp};
use moim_core::visibility::ReadPermission;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub content: String,
    /// The producer's permission object; `None` means open to all members.
    pub read_permission: Option<Json<ReadPermission>>,
    pub attachments: Json<Vec<Attachment>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Post {
    /// The read restriction, if any, for access evaluation.
    pub fn permission(&self) -> Option<&ReadPermission> {
        self.read_permission.as_ref().map(|p| &p.0)
    }
}

/// DTO for creating a post. Attachments accept both the legacy bare-path
/// shape and the structured shape; they are normalized before storage.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub read_permission: Option<ReadPermission>,
    #[serde(default)]
    pub attachments: Vec<RawAttachment>,
}
