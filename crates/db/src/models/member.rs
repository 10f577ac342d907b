//! Member entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use moim_core::roles::Role;
use moim_core::types::{DbId, Timestamp};
use moim_core::visibility::Viewer;

/// Full member row from the `members` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`MemberResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: DbId,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub department: String,
    pub role: String,
    pub email_opt_in: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Member {
    /// The identity facts access evaluation needs about this member.
    ///
    /// Unknown role strings rank as a plain member.
    pub fn viewer(&self) -> Viewer {
        Viewer {
            member_id: self.id,
            department: self.department.clone(),
            role: Role::from_str_db(&self.role),
        }
    }
}

/// Safe member representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: DbId,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub department: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            username: member.username,
            name: member.name,
            email: member.email,
            department: member.department,
            role: member.role,
            is_active: member.is_active,
            created_at: member.created_at,
        }
    }
}

/// DTO for creating a new member.
#[derive(Debug, Deserialize)]
pub struct CreateMember {
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub department: String,
    pub role: String,
    pub email_opt_in: bool,
}
