//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskmind_core::import::TaskSeed;
use taskmind_core::types::DbId;

use crate::models::task::Task;

const COLUMNS: &str = "id, owner_id, title, description, project_id, category_id, \
    priority, status, estimated_minutes, ai_generated, ai_metadata, source_note_id, \
    created_at, updated_at";

/// Provides owner-scoped reads and inserts for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a task, returning the created row.
    pub async fn create(pool: &PgPool, seed: &TaskSeed) -> Result<Task, sqlx::Error> {
        let estimated_minutes = seed
            .estimated_minutes
            .map(i32::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let query = format!(
            "INSERT INTO tasks (owner_id, title, project_id, category_id, priority, status, \
                                estimated_minutes, ai_generated, ai_metadata, source_note_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(seed.owner_id)
            .bind(&seed.title)
            .bind(seed.project_id)
            .bind(seed.category_id)
            .bind(seed.priority.as_str())
            .bind(seed.status.as_str())
            .bind(estimated_minutes)
            .bind(seed.ai_generated)
            .bind(&seed.ai_metadata)
            .bind(seed.source_note_id)
            .fetch_one(pool)
            .await
    }

    /// List all tasks of an owner, oldest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }
}
