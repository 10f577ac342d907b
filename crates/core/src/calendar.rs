//! Calendar period expansion.
//!
//! The calendar view wants events indexed by day, so a multi-day event is
//! materialized onto every day it overlaps. Expansion also applies the
//! per-event department filter, which is simpler than content read
//! permissions: an event either has a non-empty department allow-list or
//! is visible to everyone, including anonymous viewers.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::DbId;
use crate::visibility::Viewer;

// ---------------------------------------------------------------------------
// CalendarSpan
// ---------------------------------------------------------------------------

/// The facts period expansion needs about one event.
///
/// Implemented by the database event model; tests use a local fixture type.
pub trait CalendarSpan {
    fn id(&self) -> DbId;
    /// First day of the event.
    fn start_date(&self) -> NaiveDate;
    /// Last day of the event, if it spans more than one day.
    fn end_date(&self) -> Option<NaiveDate>;
    /// Department allow-list; `None` or empty means unrestricted.
    fn allowed_departments(&self) -> Option<&[String]>;
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// Expand events into a day-indexed view for `viewer`.
///
/// Every day in `[start_date, end_date]` inclusive gets the event appended
/// to its bucket, at most once per day per event ID. A span whose end
/// precedes its start is malformed input; it is clamped to a single day and
/// logged rather than dropped. Keys iterate in ascending date order.
pub fn expand_by_day<'a, E: CalendarSpan>(
    events: &'a [E],
    viewer: Option<&Viewer>,
) -> BTreeMap<NaiveDate, Vec<&'a E>> {
    let mut days: BTreeMap<NaiveDate, Vec<&'a E>> = BTreeMap::new();

    for event in events {
        if !department_allows(event.allowed_departments(), viewer) {
            continue;
        }

        let start = event.start_date();
        let mut end = event.end_date().unwrap_or(start);
        if end < start {
            tracing::warn!(
                event_id = event.id(),
                %start,
                %end,
                "event span ends before it starts, clamping to a single day"
            );
            end = start;
        }

        for day in start.iter_days().take_while(|day| *day <= end) {
            let bucket = days.entry(day).or_default();
            if !bucket.iter().any(|existing| existing.id() == event.id()) {
                bucket.push(event);
            }
        }
    }

    days
}

fn department_allows(allowed: Option<&[String]>, viewer: Option<&Viewer>) -> bool {
    match allowed {
        Some(departments) if !departments.is_empty() => viewer
            .map(|viewer| departments.iter().any(|d| d == &viewer.department))
            .unwrap_or(false),
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
