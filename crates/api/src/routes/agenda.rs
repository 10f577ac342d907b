//! Route definitions for the `/agendas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::agenda;
use crate::state::AppState;

/// Routes mounted at `/agendas`.
///
/// ```text
/// GET  /     -> list_agendas (public; filtered by visibility)
/// POST /     -> create_agenda (requires auth; triggers fan-out)
/// GET  /{id} -> get_agenda
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(agenda::list_agendas).post(agenda::create_agenda))
        .route("/{id}", get(agenda::get_agenda))
}
