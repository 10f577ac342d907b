//! Route definitions for the `/calendar` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

/// Routes mounted at `/calendar`.
///
/// ```text
/// GET  / -> day_index (?from=YYYY-MM-DD&to=YYYY-MM-DD; public, filtered)
/// POST / -> create_event (requires auth; triggers fan-out)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(calendar::day_index).post(calendar::create_event),
    )
}
