//! Repository for the `members` table.

use sqlx::PgPool;

use moim_core::types::DbId;

use crate::models::member::{CreateMember, Member};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, name, email, password_hash, department, role, \
                       email_opt_in, is_active, created_at, updated_at";

/// Provides CRUD operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (username, name, email, password_hash, department, role, email_opt_in)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.username)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.department)
            .bind(&input.role)
            .bind(input.email_opt_in)
            .fetch_one(pool)
            .await
    }

    /// Find a member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a member by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE username = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List the active roster, the population for department broadcasts.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE is_active = true ORDER BY id");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// Activate or deactivate a member.
    ///
    /// Returns `true` if a row was updated.
    pub async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE members SET is_active = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
