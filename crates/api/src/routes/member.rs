//! Route definitions for the `/members` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::member;
use crate::state::AppState;

/// Routes mounted at `/members`.
///
/// ```text
/// GET / -> list_members (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(member::list_members))
}
