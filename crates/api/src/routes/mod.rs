pub mod agenda;
pub mod auth;
pub mod calendar;
pub mod health;
pub mod member;
pub mod notification;
pub mod post;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
///
/// /members                         active roster (requires auth)
///
/// /posts                           list (public, filtered), create
/// /posts/{id}                      get (404 absent, 403 restricted)
///
/// /agendas                         list (public, filtered), create
/// /agendas/{id}                    get (404 absent, 403 restricted)
///
/// /calendar                        day index (?from, ?to; public, filtered), create
///
/// /notifications                   list (?unread_only, limit, offset)
/// /notifications/read-all          mark all read (POST)
/// /notifications/unread-count      unread count (GET)
/// /notifications/{id}/read         mark read (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login only; tokens expire, there is no refresh).
        .nest("/auth", auth::router())
        // Active member roster.
        .nest("/members", member::router())
        // Posts: visibility-filtered reads, publishing with fan-out.
        .nest("/posts", post::router())
        // Agendas: same shape as posts.
        .nest("/agendas", agenda::router())
        // Calendar events and the day-indexed view.
        .nest("/calendar", calendar::router())
        // Per-member notification inbox.
        .nest("/notifications", notification::router())
}
