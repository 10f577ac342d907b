//! Calendar event entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use moim_core::calendar::CalendarSpan;
use moim_core::types::{DbId, Timestamp};

/// A row from the `calendar_events` table.
///
/// `end_date` is `None` for single-day events; a stored `end_date` earlier
/// than `event_date` is legacy bad data that the period expander clamps.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CalendarEvent {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Department allow-list; `None` or empty means visible to everyone.
    pub allowed_departments: Option<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CalendarSpan for CalendarEvent {
    fn id(&self) -> DbId {
        self.id
    }

    fn start_date(&self) -> NaiveDate {
        self.event_date
    }

    fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    fn allowed_departments(&self) -> Option<&[String]> {
        self.allowed_departments.as_deref()
    }
}

/// DTO for creating a calendar event.
#[derive(Debug, Deserialize)]
pub struct CreateCalendarEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub allowed_departments: Option<Vec<String>>,
}
