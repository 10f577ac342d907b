//! Route definitions for the `/posts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::post;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET  /     -> list_posts (public; filtered by visibility)
/// POST /     -> create_post (requires auth; triggers fan-out)
/// GET  /{id} -> get_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(post::list_posts).post(post::create_post))
        .route("/{id}", get(post::get_post))
}
