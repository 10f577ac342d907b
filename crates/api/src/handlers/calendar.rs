//! Handlers for the `/calendar` resource.
//!
//! The read side returns a day-indexed view: every day an event overlaps
//! gets that event in its bucket, filtered by the viewer's department. The
//! calendar is readable anonymously; restricted events are simply omitted.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use moim_core::calendar::expand_by_day;
use moim_core::content::ContentKind;
use moim_core::error::CoreError;
use moim_core::visibility::ReadPermission;
use moim_db::models::calendar_event::{CalendarEvent, CreateCalendarEvent};
use moim_db::repositories::CalendarEventRepo;
use moim_notify::Publication;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthMember, MaybeAuthMember};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /calendar`.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// First day of the window (inclusive).
    pub from: NaiveDate,
    /// Last day of the window (inclusive).
    pub to: NaiveDate,
}

/// POST /api/v1/calendar
///
/// Create a calendar event and fan out notifications: mentioned members
/// plus, for department-restricted events, the allowed departments.
pub async fn create_event(
    auth: AuthMember,
    State(state): State<AppState>,
    Json(input): Json<CreateCalendarEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<CalendarEvent>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }

    let event = CalendarEventRepo::create(&state.pool, auth.member.id, &input).await?;

    // An empty department list means unrestricted, which broadcasts to
    // nobody; only a non-empty list becomes a department-scoped permission.
    let permission = event
        .allowed_departments
        .as_deref()
        .filter(|departments| !departments.is_empty())
        .map(|departments| ReadPermission::departments(departments.iter().cloned()));

    let publication = Publication {
        kind: ContentKind::CalendarEvent,
        content_id: event.id,
        title: event.title.clone(),
        author_id: auth.member.id,
        author_name: auth.member.name.clone(),
        permission,
    };
    let content = event.description.as_deref().unwrap_or("");
    state
        .dispatcher
        .dispatch_publication(&publication, content)
        .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/calendar?from=YYYY-MM-DD&to=YYYY-MM-DD
///
/// Day-indexed events overlapping the inclusive window, as seen by the
/// viewer. Keys are ISO dates in ascending order; multi-day events appear
/// once per overlapped day.
pub async fn day_index(
    viewer: MaybeAuthMember,
    State(state): State<AppState>,
    Query(params): Query<CalendarQuery>,
) -> AppResult<Json<DataResponse<BTreeMap<NaiveDate, Vec<CalendarEvent>>>>> {
    if params.from > params.to {
        return Err(AppError::BadRequest(
            "'from' must not be after 'to'".into(),
        ));
    }

    let events = CalendarEventRepo::find_in_range(&state.pool, params.from, params.to).await?;

    let viewer = viewer.viewer();
    let data = expand_by_day(&events, viewer.as_ref())
        .into_iter()
        // The expansion covers each event's full span; trim days that fall
        // outside the requested window.
        .filter(|(day, _)| *day >= params.from && *day <= params.to)
        .map(|(day, events)| (day, events.into_iter().cloned().collect()))
        .collect();

    Ok(Json(DataResponse { data }))
}
