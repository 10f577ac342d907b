//! Repository for the `calendar_events` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use moim_core::types::DbId;

use crate::models::calendar_event::{CalendarEvent, CreateCalendarEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_id, title, description, event_date, end_date, \
                       allowed_departments, created_at, updated_at";

/// Provides CRUD operations for calendar events.
pub struct CalendarEventRepo;

impl CalendarEventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateCalendarEvent,
    ) -> Result<CalendarEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO calendar_events (author_id, title, description, event_date, end_date, allowed_departments)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.event_date)
            .bind(input.end_date)
            .bind(&input.allowed_departments)
            .fetch_one(pool)
            .await
    }

    /// List events overlapping the inclusive `[from, to]` window.
    ///
    /// `GREATEST(event_date, ...)` keeps legacy rows whose `end_date`
    /// precedes `event_date` findable on their (clamped) single day.
    pub async fn find_in_range(
        pool: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calendar_events
             WHERE event_date <= $2
               AND GREATEST(event_date, COALESCE(end_date, event_date)) >= $1
             ORDER BY event_date, id"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
