//! Category (topic) entity model.

use serde::Serialize;
use sqlx::FromRow;
use taskmind_core::import::NamedRecord;
use taskmind_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub color: String,
    pub icon: String,
    /// One of `note`, `task`, `both`.
    #[serde(rename = "type")]
    pub kind: String,
    pub ai_generated: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NamedRecord for Category {
    fn id(&self) -> DbId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
