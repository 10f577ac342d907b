//! Content and notification kind enumerations.
//!
//! These must match the values written to the `notifications.kind` column;
//! the closed set is `mention`, `post`, `event`, `agenda`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// ContentKind
// ---------------------------------------------------------------------------

/// What kind of content item a publish event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Post,
    CalendarEvent,
    Agenda,
}

impl ContentKind {
    /// The notification kind recorded for department broadcasts about this
    /// content. Mentions always record [`NotificationKind::Mention`] instead.
    pub fn notification_kind(self) -> NotificationKind {
        match self {
            ContentKind::Post => NotificationKind::Post,
            ContentKind::CalendarEvent => NotificationKind::Event,
            ContentKind::Agenda => NotificationKind::Agenda,
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Why a notification record exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The recipient was mentioned in the content body.
    Mention,
    /// A post was shared with the recipient's department.
    Post,
    /// A calendar event was shared with the recipient's department.
    Event,
    /// An agenda was shared with the recipient's department.
    Agenda,
}

impl NotificationKind {
    /// Convert to a database-compatible string.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Mention => "mention",
            NotificationKind::Post => "post",
            NotificationKind::Event => "event",
            NotificationKind::Agenda => "agenda",
        }
    }

    /// Parse a kind string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "mention" => Ok(NotificationKind::Mention),
            "post" => Ok(NotificationKind::Post),
            "event" => Ok(NotificationKind::Event),
            "agenda" => Ok(NotificationKind::Agenda),
            _ => Err(CoreError::Validation(format!(
                "Invalid notification kind '{s}'. Must be one of: mention, post, event, agenda"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
