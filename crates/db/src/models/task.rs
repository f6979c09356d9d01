//! Task entity model.

use serde::Serialize;
use sqlx::FromRow;
use taskmind_core::types::{DbId, Timestamp};

/// A row from the `tasks` table.
///
/// `priority` and `status` hold the Vietnamese domain labels from
/// `taskmind_core::task_vocab`; the table's CHECK constraints restrict them.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: String,
    pub project_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub priority: String,
    pub status: String,
    pub estimated_minutes: Option<i32>,
    pub ai_generated: bool,
    pub ai_metadata: Option<serde_json::Value>,
    pub source_note_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
