//! HTTP-level integration tests for calendar events and the day-indexed
//! view: span expansion, window trimming, department filtering, and the
//! event fan-out path.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, login_token, post_json_auth, seed_member};
use moim_db::repositories::NotificationRepo;
use sqlx::PgPool;

/// Create an event as the given token's member and return its id.
async fn create_event(
    app: axum::Router,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response = post_json_auth(app, "/api/v1/calendar", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Creating an event requires authentication.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_event_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "총회", "event_date": "2026-05-01" });
    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/api/v1/calendar")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A department-restricted event notifies the allowed departments with
/// kind `event`; a mention in the description notifies with kind `mention`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_fans_out_event_kind(pool: PgPool) {
    seed_member(&pool, "author", "총관리", "president").await;
    let dev = seed_member(&pool, "dev", "개발부", "member").await;
    let mentioned = seed_member(&pool, "mentioned", "기획부", "member").await;

    let app = common::build_test_app(pool.clone());
    let token = login_token(app.clone(), "author").await;

    create_event(
        app,
        &token,
        serde_json::json!({
            "title": "개발부 워크숍",
            "description": format!(
                r#"<span class="mention" data-member-id="{}">@기획</span> 참고"#,
                mentioned.id
            ),
            "event_date": "2026-05-01",
            "end_date": "2026-05-02",
            "allowed_departments": ["개발부"],
        }),
    )
    .await;

    let dev_kinds: Vec<String> = NotificationRepo::list_for_member(&pool, dev.id, false, 50, 0)
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.kind)
        .collect();
    assert_eq!(dev_kinds, vec!["event"]);

    let mentioned_kinds: Vec<String> =
        NotificationRepo::list_for_member(&pool, mentioned.id, false, 50, 0)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.kind)
            .collect();
    assert_eq!(mentioned_kinds, vec!["mention"]);
}

// ---------------------------------------------------------------------------
// Day index
// ---------------------------------------------------------------------------

/// A three-day event lands exactly once in each of its three day buckets.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_three_day_span_expansion(pool: PgPool) {
    seed_member(&pool, "author", "총관리", "president").await;
    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "author").await;

    create_event(
        app.clone(),
        &token,
        serde_json::json!({
            "title": "엠티",
            "event_date": "2026-05-01",
            "end_date": "2026-05-03",
        }),
    )
    .await;

    // The calendar is readable anonymously.
    let response = get(app, "/api/v1/calendar?from=2026-05-01&to=2026-05-31").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let days = json["data"].as_object().unwrap();
    assert_eq!(days.len(), 3);
    for day in ["2026-05-01", "2026-05-02", "2026-05-03"] {
        let bucket = days[day].as_array().unwrap();
        assert_eq!(bucket.len(), 1, "{day} must hold the event exactly once");
        assert_eq!(bucket[0]["title"], "엠티");
    }
}

/// Days outside the requested window are trimmed even when the event span
/// extends past it.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_window_trims_span(pool: PgPool) {
    seed_member(&pool, "author", "총관리", "president").await;
    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "author").await;

    create_event(
        app.clone(),
        &token,
        serde_json::json!({
            "title": "장기 프로젝트",
            "event_date": "2026-04-28",
            "end_date": "2026-05-02",
        }),
    )
    .await;

    let response = get(app, "/api/v1/calendar?from=2026-05-01&to=2026-05-31").await;
    let json = body_json(response).await;
    let days = json["data"].as_object().unwrap();

    let keys: Vec<&String> = days.keys().collect();
    assert_eq!(keys, ["2026-05-01", "2026-05-02"]);
}

/// Department-restricted events are hidden from anonymous viewers and
/// other departments but visible to the allowed one.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_department_filter(pool: PgPool) {
    seed_member(&pool, "author", "총관리", "president").await;
    seed_member(&pool, "dev", "개발부", "member").await;
    seed_member(&pool, "outsider", "홍보부", "member").await;

    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "author").await;

    create_event(
        app.clone(),
        &token,
        serde_json::json!({
            "title": "개발부 회의",
            "event_date": "2026-05-10",
            "allowed_departments": ["개발부"],
        }),
    )
    .await;

    let window = "/api/v1/calendar?from=2026-05-01&to=2026-05-31";

    let json = body_json(get(app.clone(), window).await).await;
    assert!(json["data"].as_object().unwrap().is_empty());

    let outsider_token = login_token(app.clone(), "outsider").await;
    let json = body_json(get_auth(app.clone(), window, &outsider_token).await).await;
    assert!(json["data"].as_object().unwrap().is_empty());

    let dev_token = login_token(app.clone(), "dev").await;
    let json = body_json(get_auth(app, window, &dev_token).await).await;
    assert_eq!(json["data"]["2026-05-10"].as_array().unwrap().len(), 1);
}

/// An event whose end precedes its start is accepted at ingestion but
/// clamped to its start day in the index.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reversed_span_clamps_to_start_day(pool: PgPool) {
    seed_member(&pool, "author", "총관리", "president").await;
    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "author").await;

    create_event(
        app.clone(),
        &token,
        serde_json::json!({
            "title": "뒤집힌 일정",
            "event_date": "2026-05-10",
            "end_date": "2026-05-08",
        }),
    )
    .await;

    let response = get(app, "/api/v1/calendar?from=2026-05-01&to=2026-05-31").await;
    let json = body_json(response).await;
    let days = json["data"].as_object().unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days["2026-05-10"].as_array().unwrap().len(), 1);
}

/// An inverted window is a client error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inverted_window_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/calendar?from=2026-05-31&to=2026-05-01").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Missing window parameters are a client error (Query rejection).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_window_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/calendar").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
