//! Note entity model (only the columns the AI features read or write).

use serde::Serialize;
use sqlx::FromRow;
use taskmind_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub owner_id: DbId,
    pub content: String,
    /// Last analyzer output stored for this note.
    pub ai_suggestions: Option<serde_json::Value>,
    pub analyzed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
