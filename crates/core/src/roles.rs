//! Organization roles and the rank order used for "manager or above" checks.
//!
//! Roles form a closed, totally ordered set. The order is expressed as an
//! explicit rank table rather than enum discriminants so that reordering or
//! inserting a role is a one-line change that cannot silently alter
//! comparisons elsewhere.

use serde::{Deserialize, Serialize};

/// An organization role, highest to lowest: president, vice-president,
/// department manager, plain member.
///
/// Stored in the `members.role` column as the snake_case form returned by
/// [`Role::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    President,
    VicePresident,
    Manager,
    Member,
}

impl Role {
    /// Rank table: higher number means more authority.
    ///
    /// Used only for ordering comparisons (e.g. "manager or above"),
    /// never for identity checks.
    pub fn rank(self) -> u8 {
        match self {
            Role::President => 4,
            Role::VicePresident => 3,
            Role::Manager => 2,
            Role::Member => 1,
        }
    }

    /// Whether this role ranks at or above department manager.
    pub fn is_manager_or_above(self) -> bool {
        self.rank() >= Role::Manager.rank()
    }

    /// The snake_case storage form of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::President => "president",
            Role::VicePresident => "vice_president",
            Role::Manager => "manager",
            Role::Member => "member",
        }
    }

    /// Parse a role string from the database.
    ///
    /// Unknown strings fall back to [`Role::Member`], the lowest rank, so a
    /// legacy row can never grant more access than a plain member has.
    pub fn from_str_db(s: &str) -> Role {
        match s {
            "president" => Role::President,
            "vice_president" => Role::VicePresident,
            "manager" => Role::Manager,
            _ => Role::Member,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
