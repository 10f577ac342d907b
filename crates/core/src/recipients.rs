//! Notification recipient resolution.
//!
//! Combines the read-permission model, extracted mentions, and the active
//! member roster into the two target sets the dispatcher fans out to. Pure
//! computation; the caller loads the roster and persists the results.

use crate::types::DbId;
use crate::visibility::{ReadPermission, ReadScope};

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// The roster facts recipient resolution needs about one active member.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub member_id: DbId,
    pub department: String,
}

/// The two disjoint notification target sets for one publish event.
///
/// A member eligible for both a mention and a department broadcast lands in
/// `mentioned` only, so a single publish never notifies anyone twice. The
/// author appears in neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientSets {
    /// Members mentioned in the content body, in document order.
    pub mentioned: Vec<DbId>,
    /// Members reached through the department allow-list, in roster order.
    pub department: Vec<DbId>,
}

impl RecipientSets {
    pub fn is_empty(&self) -> bool {
        self.mentioned.is_empty() && self.department.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the notification targets for a publish event.
///
/// `mentions` is the extractor's output (already de-duplicated, document
/// order). Department broadcast applies only when the item is restricted to
/// specific departments with a non-empty allow-list; open items and the
/// other scopes notify mentioned members only.
pub fn resolve_recipients(
    author_id: DbId,
    permission: Option<&ReadPermission>,
    mentions: &[DbId],
    roster: &[RosterEntry],
) -> RecipientSets {
    let mentioned: Vec<DbId> = mentions
        .iter()
        .copied()
        .filter(|&id| id != author_id)
        .collect();

    let department = match permission {
        Some(permission) if permission.read == ReadScope::Department => {
            match permission.allowed_departments.as_deref() {
                Some(allowed) if !allowed.is_empty() => roster
                    .iter()
                    .filter(|entry| allowed.contains(&entry.department))
                    .map(|entry| entry.member_id)
                    .filter(|&id| id != author_id && !mentioned.contains(&id))
                    .collect(),
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    };

    RecipientSets {
        mentioned,
        department,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
