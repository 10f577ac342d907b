//! Repository for the `notifications` table.

use sqlx::PgPool;

use moim_core::content::NotificationKind;
use moim_core::types::DbId;

use crate::models::notification::Notification;

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, member_id, kind, title, message, related_id, is_read, read_at, \
                       created_at, updated_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create a notification for a member, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        member_id: DbId,
        kind: NotificationKind,
        title: &str,
        message: &str,
        related_id: Option<DbId>,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications (member_id, kind, title, message, related_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(member_id)
        .bind(kind.as_str())
        .bind(title)
        .bind(message)
        .bind(related_id)
        .fetch_one(pool)
        .await
    }

    /// List notifications for a member, newest first.
    ///
    /// When `unread_only` is `true`, only notifications with `is_read = false`
    /// are returned.
    pub async fn list_for_member(
        pool: &PgPool,
        member_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only {
            "AND is_read = false"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE member_id = $1 {filter} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(member_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a single notification as read.
    ///
    /// Returns `true` if the notification was found for the given member and
    /// updated, `false` otherwise.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        member_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications \
             SET is_read = true, read_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND member_id = $2 AND is_read = false",
        )
        .bind(notification_id)
        .bind(member_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all unread notifications as read for a member.
    ///
    /// Returns the number of notifications that were marked read.
    pub async fn mark_all_read(pool: &PgPool, member_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications \
             SET is_read = true, read_at = NOW(), updated_at = NOW() \
             WHERE member_id = $1 AND is_read = false",
        )
        .bind(member_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Get the number of unread notifications for a member.
    pub async fn unread_count(pool: &PgPool, member_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE member_id = $1 AND is_read = false",
        )
        .bind(member_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
