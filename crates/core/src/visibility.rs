//! Content read permissions and the access evaluation rules.
//!
//! A content item optionally carries a [`ReadPermission`] produced by the
//! authoring UI. The wire shape is fixed by that producer contract:
//! `{ "read": <scope label>, "allowedDepartments": [..] }` with the scope
//! labels in Korean. Everything here is pure and side-effect free apart
//! from a data-quality warning on malformed department configuration.

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Wire labels
// ---------------------------------------------------------------------------

/// Scope label: readable by the whole organization.
pub const SCOPE_ALL: &str = "전체";

/// Scope label: readable by department managers and above.
pub const SCOPE_MANAGER_UP: &str = "부장 이상";

/// Scope label: readable by an explicit list of departments.
pub const SCOPE_DEPARTMENT: &str = "특정 부서";

/// Scope label: readable by the author only.
pub const SCOPE_AUTHOR_ONLY: &str = "작성자만";

// ---------------------------------------------------------------------------
// ReadScope
// ---------------------------------------------------------------------------

/// Who may read a content item.
///
/// Converted to and from the producer's label strings via `From`, so a
/// label this code has never seen decodes to [`ReadScope::Unknown`] instead
/// of failing the surrounding row or request. Unknown scopes always deny.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReadScope {
    All,
    ManagerUp,
    Department,
    AuthorOnly,
    /// An unrecognized scope label, preserved verbatim for round-tripping.
    Unknown(String),
}

impl Default for ReadScope {
    fn default() -> Self {
        // A permission object without a scope is malformed; deny by default.
        ReadScope::Unknown(String::new())
    }
}

impl From<String> for ReadScope {
    fn from(label: String) -> Self {
        match label.as_str() {
            SCOPE_ALL => ReadScope::All,
            SCOPE_MANAGER_UP => ReadScope::ManagerUp,
            SCOPE_DEPARTMENT => ReadScope::Department,
            SCOPE_AUTHOR_ONLY => ReadScope::AuthorOnly,
            _ => ReadScope::Unknown(label),
        }
    }
}

impl From<ReadScope> for String {
    fn from(scope: ReadScope) -> Self {
        match scope {
            ReadScope::All => SCOPE_ALL.to_string(),
            ReadScope::ManagerUp => SCOPE_MANAGER_UP.to_string(),
            ReadScope::Department => SCOPE_DEPARTMENT.to_string(),
            ReadScope::AuthorOnly => SCOPE_AUTHOR_ONLY.to_string(),
            ReadScope::Unknown(label) => label,
        }
    }
}

// ---------------------------------------------------------------------------
// ReadPermission
// ---------------------------------------------------------------------------

/// Read restriction attached to a post or agenda.
///
/// Absence of the whole object means the item is open to every signed-in
/// member; that case is modelled as `Option<ReadPermission>` at the call
/// sites, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadPermission {
    /// The scope label. Missing or unrecognized labels deny (fail closed).
    #[serde(default)]
    pub read: ReadScope,

    /// Allow-listed departments, only meaningful for [`ReadScope::Department`].
    #[serde(
        rename = "allowedDepartments",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_departments: Option<Vec<String>>,
}

impl ReadPermission {
    /// A permission restricted to the given departments.
    pub fn departments<I, S>(departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            read: ReadScope::Department,
            allowed_departments: Some(departments.into_iter().map(Into::into).collect()),
        }
    }

    /// A permission with the given scope and no department list.
    pub fn scope(read: ReadScope) -> Self {
        Self {
            read,
            allowed_departments: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Viewer
// ---------------------------------------------------------------------------

/// The identity facts access evaluation needs about the requesting member.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub member_id: DbId,
    pub department: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Access evaluation
// ---------------------------------------------------------------------------

/// Decide whether `viewer` may read a content item.
///
/// Rules are applied in order:
///
/// 1. No viewer (anonymous) -- deny.
/// 2. The author always sees their own content, whatever the restriction.
/// 3. No permission object -- open, grant.
/// 4. Scope `전체` -- grant.
/// 5. Scope `부장 이상` -- grant iff the viewer ranks at or above manager.
/// 6. Scope `특정 부서` -- grant iff the allow-list is non-empty and contains
///    the viewer's department. An empty or missing list is a configuration
///    error: deny everyone but the author and log a warning.
/// 7. Scope `작성자만` -- deny (the author was already granted in rule 2).
/// 8. Anything else -- deny.
pub fn can_read(
    viewer: Option<&Viewer>,
    author_id: DbId,
    permission: Option<&ReadPermission>,
) -> bool {
    let Some(viewer) = viewer else {
        return false;
    };

    if viewer.member_id == author_id {
        return true;
    }

    let Some(permission) = permission else {
        return true;
    };

    match &permission.read {
        ReadScope::All => true,
        ReadScope::ManagerUp => viewer.role.is_manager_or_above(),
        ReadScope::Department => match permission.allowed_departments.as_deref() {
            Some(departments) if !departments.is_empty() => {
                departments.iter().any(|d| d == &viewer.department)
            }
            _ => {
                tracing::warn!(
                    author_id,
                    "department-scoped permission has no allowed departments, denying"
                );
                false
            }
        },
        ReadScope::AuthorOnly => false,
        ReadScope::Unknown(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
