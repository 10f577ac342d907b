//! Notification repository tests: creation, listing, read state.

use sqlx::PgPool;

use moim_core::content::NotificationKind;
use moim_db::models::member::CreateMember;
use moim_db::repositories::{MemberRepo, NotificationRepo};

async fn seed_member(pool: &PgPool, username: &str) -> i64 {
    MemberRepo::create(
        pool,
        &CreateMember {
            username: username.to_string(),
            name: username.to_string(),
            email: None,
            password_hash: "argon2-hash".to_string(),
            department: "개발부".to_string(),
            role: "member".to_string(),
            email_opt_in: true,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_newest_first(pool: PgPool) {
    let member_id = seed_member(&pool, "kim").await;

    NotificationRepo::create(&pool, member_id, NotificationKind::Mention, "멘션", "m1", Some(1))
        .await
        .unwrap();
    let second = NotificationRepo::create(
        &pool,
        member_id,
        NotificationKind::Post,
        "새 게시글",
        "m2",
        Some(2),
    )
    .await
    .unwrap();

    let all = NotificationRepo::list_for_member(&pool, member_id, false, 50, 0)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second);
    assert_eq!(all[0].kind, "post");
    assert_eq!(all[1].kind, "mention");
    assert!(!all[0].is_read);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unread_filter_and_count(pool: PgPool) {
    let member_id = seed_member(&pool, "kim").await;
    let other_id = seed_member(&pool, "lee").await;

    let first =
        NotificationRepo::create(&pool, member_id, NotificationKind::Mention, "멘션", "m", None)
            .await
            .unwrap();
    NotificationRepo::create(&pool, member_id, NotificationKind::Agenda, "안건", "m", None)
        .await
        .unwrap();
    NotificationRepo::create(&pool, other_id, NotificationKind::Post, "글", "m", None)
        .await
        .unwrap();

    assert_eq!(NotificationRepo::unread_count(&pool, member_id).await.unwrap(), 2);

    assert!(NotificationRepo::mark_read(&pool, first, member_id).await.unwrap());
    // Second attempt is a no-op.
    assert!(!NotificationRepo::mark_read(&pool, first, member_id).await.unwrap());

    let unread = NotificationRepo::list_for_member(&pool, member_id, true, 50, 0)
        .await
        .unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(NotificationRepo::unread_count(&pool, member_id).await.unwrap(), 1);

    // Other members' notifications are untouched.
    assert_eq!(NotificationRepo::unread_count(&pool, other_id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_requires_matching_member(pool: PgPool) {
    let member_id = seed_member(&pool, "kim").await;
    let other_id = seed_member(&pool, "lee").await;

    let id = NotificationRepo::create(&pool, member_id, NotificationKind::Post, "글", "m", None)
        .await
        .unwrap();

    assert!(!NotificationRepo::mark_read(&pool, id, other_id).await.unwrap());
    assert_eq!(NotificationRepo::unread_count(&pool, member_id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_all_read(pool: PgPool) {
    let member_id = seed_member(&pool, "kim").await;

    for i in 0..3 {
        NotificationRepo::create(
            &pool,
            member_id,
            NotificationKind::Event,
            "일정",
            &format!("m{i}"),
            None,
        )
        .await
        .unwrap();
    }

    assert_eq!(NotificationRepo::mark_all_read(&pool, member_id).await.unwrap(), 3);
    assert_eq!(NotificationRepo::unread_count(&pool, member_id).await.unwrap(), 0);
    assert_eq!(NotificationRepo::mark_all_read(&pool, member_id).await.unwrap(), 0);
}

/// Persisting against a nonexistent member is a store error the dispatcher
/// has to isolate per recipient.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_member_is_a_store_error(pool: PgPool) {
    let result =
        NotificationRepo::create(&pool, 999_999, NotificationKind::Mention, "멘션", "m", None)
            .await;
    assert!(result.is_err());
}
