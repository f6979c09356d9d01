//! Project entity model.

use serde::Serialize;
use sqlx::FromRow;
use taskmind_core::import::NamedRecord;
use taskmind_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    /// One of `active`, `completed`, `archived`.
    pub status: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub ai_generated: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NamedRecord for Project {
    fn id(&self) -> DbId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
