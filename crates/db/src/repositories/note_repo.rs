//! Repository for the `notes` table.

use sqlx::PgPool;
use taskmind_core::types::DbId;

use crate::models::note::Note;

const COLUMNS: &str = "id, owner_id, content, ai_suggestions, analyzed_at, created_at, updated_at";

/// Provides the note operations the AI features need.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note, returning the created row.
    pub async fn create(pool: &PgPool, owner_id: DbId, content: &str) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (owner_id, content) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Find a note owned by `owner_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Store analyzer suggestions on a note and stamp `analyzed_at`.
    ///
    /// Returns `None` if the note does not exist or belongs to someone else.
    pub async fn record_ai_suggestions(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        suggestions: &serde_json::Value,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET ai_suggestions = $3, analyzed_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(suggestions)
            .fetch_optional(pool)
            .await
    }
}
