//! Repository for the `agendas` table.

use sqlx::types::Json;
use sqlx::PgPool;

use moim_core::types::DbId;

use crate::models::agenda::{Agenda, CreateAgenda};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, author_id, title, content, read_permission, meeting_date, created_at, updated_at";

/// Provides CRUD operations for agendas.
pub struct AgendaRepo;

impl AgendaRepo {
    /// Insert a new agenda, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateAgenda,
    ) -> Result<Agenda, sqlx::Error> {
        let query = format!(
            "INSERT INTO agendas (author_id, title, content, read_permission, meeting_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Agenda>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.read_permission.as_ref().map(Json))
            .bind(input.meeting_date)
            .fetch_one(pool)
            .await
    }

    /// Find an agenda by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Agenda>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agendas WHERE id = $1");
        sqlx::query_as::<_, Agenda>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all agendas, newest first. Permission filtering happens in the
    /// caller.
    pub async fn list(pool: &PgPool) -> Result<Vec<Agenda>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agendas ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Agenda>(&query).fetch_all(pool).await
    }
}
