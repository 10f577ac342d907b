//! Meeting agenda entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use moim_core::types::{DbId, Timestamp};
use moim_core::visibility::ReadPermission;

/// A row from the `agendas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Agenda {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub content: String,
    /// The producer's permission object; `None` means open to all members.
    pub read_permission: Option<Json<ReadPermission>>,
    pub meeting_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Agenda {
    /// The read restriction, if any, for access evaluation.
    pub fn permission(&self) -> Option<&ReadPermission> {
        self.read_permission.as_ref().map(|p| &p.0)
    }
}

/// DTO for creating an agenda.
#[derive(Debug, Deserialize)]
pub struct CreateAgenda {
    pub title: String,
    pub content: String,
    pub read_permission: Option<ReadPermission>,
    pub meeting_date: Option<NaiveDate>,
}
