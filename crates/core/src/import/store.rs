//! Storage seam for the import pipeline.
//!
//! The pipeline only needs a handful of owner-scoped reads and three inserts,
//! so it depends on this trait rather than on a database crate. The Postgres
//! implementation lives in `taskmind_db::import_store`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::task_vocab::{TaskPriority, TaskStatus};
use crate::types::DbId;

/// A stored record addressable by id and matched by name.
pub trait NamedRecord {
    fn id(&self) -> DbId;
    fn name(&self) -> &str;
}

/// Which listings a category shows up in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Note,
    Task,
    #[default]
    Both,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Task => "task",
            Self::Both => "both",
        }
    }
}

/// Fields for a project created by the importer.
#[derive(Debug, Clone)]
pub struct ProjectSeed {
    pub owner_id: DbId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub ai_generated: bool,
}

/// Fields for a category created by the importer.
#[derive(Debug, Clone)]
pub struct CategorySeed {
    pub owner_id: DbId,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub kind: CategoryKind,
    pub ai_generated: bool,
}

/// Fields for one imported task.
#[derive(Debug, Clone)]
pub struct TaskSeed {
    pub owner_id: DbId,
    pub title: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub project_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub estimated_minutes: Option<u32>,
    pub ai_generated: bool,
    /// Raw AI labels of the originating draft.
    pub ai_metadata: serde_json::Value,
    pub source_note_id: Option<DbId>,
}

/// Failures reported by an [`ImportStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An insert hit the per-owner case-insensitive name uniqueness constraint.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Storage failure: {0}")]
    Backend(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(detail) => CoreError::Conflict(detail),
            StoreError::Backend(detail) => CoreError::Internal(detail),
        }
    }
}

/// Owner-scoped storage operations used by the import pipeline.
///
/// Every method takes the owner id explicitly (or inside the seed); an
/// implementation must never return another owner's rows.
#[async_trait]
pub trait ImportStore: Send + Sync {
    type Project: NamedRecord + Clone + Send + Sync;
    type Category: NamedRecord + Clone + Send + Sync;
    type Task: Send;

    /// All projects of the owner.
    async fn projects_for_owner(&self, owner_id: DbId) -> Result<Vec<Self::Project>, StoreError>;

    /// Categories of the owner usable for tasks (`task` or `both`).
    async fn task_categories_for_owner(
        &self,
        owner_id: DbId,
    ) -> Result<Vec<Self::Category>, StoreError>;

    /// Case-insensitive lookup of a single project by name.
    async fn find_project_by_name(
        &self,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<Self::Project>, StoreError>;

    /// Case-insensitive lookup of a single category by name, of any kind.
    async fn find_category_by_name(
        &self,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<Self::Category>, StoreError>;

    async fn create_project(&self, seed: &ProjectSeed) -> Result<Self::Project, StoreError>;

    async fn create_category(&self, seed: &CategorySeed) -> Result<Self::Category, StoreError>;

    async fn create_task(&self, seed: &TaskSeed) -> Result<Self::Task, StoreError>;
}
