//! Repository for the `posts` table.

use sqlx::types::Json;
use sqlx::PgPool;

use moim_core::attachments::normalize_attachments;
use moim_core::types::DbId;

use crate::models::post::{CreatePost, Post};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, author_id, title, content, read_permission, attachments, created_at, updated_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// Attachments are normalized here so nothing past the ingestion
    /// boundary ever sees the legacy bare-path shape.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let attachments = normalize_attachments(input.attachments);
        let query = format!(
            "INSERT INTO posts (author_id, title, content, read_permission, attachments)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.read_permission.as_ref().map(Json))
            .bind(Json(&attachments))
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts, newest first.
    ///
    /// Read-permission filtering happens in the caller; the permission
    /// semantics live in `moim_core::visibility`, not in SQL.
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }
}
