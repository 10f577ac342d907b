//! HTTP-level integration tests for the notification endpoints: listing,
//! paging, unread counts, and the two mark-read operations.
//!
//! Notifications are seeded directly through the repository since the API
//! itself never creates them outside the publish fan-out.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, login_token, post_auth, seed_member};
use moim_core::content::NotificationKind;
use moim_db::repositories::NotificationRepo;
use sqlx::PgPool;

/// Seed an unread notification and return its id.
async fn seed_notification(
    pool: &PgPool,
    member_id: moim_core::types::DbId,
    kind: NotificationKind,
    title: &str,
) -> moim_core::types::DbId {
    NotificationRepo::create(pool, member_id, kind, title, "내용", None)
        .await
        .expect("notification insert should succeed")
}

/// Fetch the authenticated member's unread count via the API.
async fn unread_count(app: axum::Router, token: &str) -> i64 {
    let response = get_auth(app, "/api/v1/notifications/unread-count", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["count"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Notifications come back newest first with their full record shape.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_newest_first(pool: PgPool) {
    let member = seed_member(&pool, "reader", "개발부", "member").await;
    seed_notification(&pool, member.id, NotificationKind::Mention, "첫번째").await;
    seed_notification(&pool, member.id, NotificationKind::Post, "두번째").await;
    seed_notification(&pool, member.id, NotificationKind::Event, "세번째").await;

    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "reader").await;

    let response = get_auth(app, "/api/v1/notifications", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 3);

    let titles: Vec<&str> = items.iter().map(|n| n["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["세번째", "두번째", "첫번째"]);

    assert_eq!(items[0]["kind"], "event");
    assert_eq!(items[0]["is_read"], false);
    assert!(items[0]["read_at"].is_null());
}

/// `unread_only=true` hides notifications that were already read.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unread_only_filter(pool: PgPool) {
    let member = seed_member(&pool, "reader", "개발부", "member").await;
    let read_id = seed_notification(&pool, member.id, NotificationKind::Post, "읽음").await;
    seed_notification(&pool, member.id, NotificationKind::Post, "안읽음").await;
    NotificationRepo::mark_read(&pool, read_id, member.id)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "reader").await;

    let json = body_json(get_auth(app, "/api/v1/notifications?unread_only=true", &token).await).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "안읽음");
}

/// `limit` and `offset` page through the list.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_limit_and_offset(pool: PgPool) {
    let member = seed_member(&pool, "reader", "개발부", "member").await;
    for title in ["하나", "둘", "셋"] {
        seed_notification(&pool, member.id, NotificationKind::Post, title).await;
    }

    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "reader").await;

    let json = body_json(get_auth(app.clone(), "/api/v1/notifications?limit=2", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json =
        body_json(get_auth(app, "/api/v1/notifications?limit=2&offset=2", &token).await).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "하나");
}

/// Members only ever see their own notifications.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_scoped_to_member(pool: PgPool) {
    let alice = seed_member(&pool, "alice", "개발부", "member").await;
    seed_member(&pool, "bob", "개발부", "member").await;
    seed_notification(&pool, alice.id, NotificationKind::Mention, "앨리스 것").await;

    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "bob").await;

    let json = body_json(get_auth(app, "/api/v1/notifications", &token).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Mark read
// ---------------------------------------------------------------------------

/// Marking a notification read returns 204 and drops the unread count.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_drops_unread_count(pool: PgPool) {
    let member = seed_member(&pool, "reader", "개발부", "member").await;
    let id = seed_notification(&pool, member.id, NotificationKind::Mention, "새 멘션").await;
    seed_notification(&pool, member.id, NotificationKind::Post, "새 글").await;

    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "reader").await;

    assert_eq!(unread_count(app.clone(), &token).await, 2);

    let response = post_auth(app.clone(), &format!("/api/v1/notifications/{id}/read"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(unread_count(app, &token).await, 1);
}

/// A notification belonging to someone else looks like it does not exist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_other_members_notification(pool: PgPool) {
    let alice = seed_member(&pool, "alice", "개발부", "member").await;
    seed_member(&pool, "bob", "홍보부", "member").await;
    let id = seed_notification(&pool, alice.id, NotificationKind::Post, "앨리스 알림").await;

    let app = common::build_test_app(pool.clone());
    let bob_token = login_token(app.clone(), "bob").await;

    let response =
        post_auth(app, &format!("/api/v1/notifications/{id}/read"), &bob_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Alice's notification is untouched.
    let count = NotificationRepo::unread_count(&pool, alice.id).await.unwrap();
    assert_eq!(count, 1);
}

/// Marking the same notification twice yields 404 on the second attempt.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_twice(pool: PgPool) {
    let member = seed_member(&pool, "reader", "개발부", "member").await;
    let id = seed_notification(&pool, member.id, NotificationKind::Agenda, "안건").await;

    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "reader").await;
    let uri = format!("/api/v1/notifications/{id}/read");

    let response = post_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Read-all reports how many notifications it marked and is idempotent.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_read_all(pool: PgPool) {
    let member = seed_member(&pool, "reader", "개발부", "member").await;
    for title in ["하나", "둘", "셋"] {
        seed_notification(&pool, member.id, NotificationKind::Post, title).await;
    }

    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "reader").await;

    let response = post_auth(app.clone(), "/api/v1/notifications/read-all", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["marked_read"], 3);

    assert_eq!(unread_count(app.clone(), &token).await, 0);

    let response = post_auth(app, "/api/v1/notifications/read-all", &token).await;
    assert_eq!(body_json(response).await["data"]["marked_read"], 0);
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Every notification endpoint rejects unauthenticated requests.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_endpoints_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/notifications").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get(app.clone(), "/api/v1/notifications/unread-count").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/api/v1/notifications/read-all")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/api/v1/notifications/1/read")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
