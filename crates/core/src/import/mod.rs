//! AI task import: turns analyzer task drafts into persisted tasks.
//!
//! - [`resolver`] -- case-insensitive name matching.
//! - [`context`] -- per-batch lookup cache and creation lists.
//! - [`materializer`] -- resolve-or-create for projects and categories.
//! - [`pipeline`] -- the batch orchestration, [`import_tasks`].
//! - [`store`] -- the storage trait the pipeline runs against.

pub mod context;
pub mod materializer;
pub mod pipeline;
pub mod resolver;
pub mod store;

#[cfg(test)]
mod memory;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub use context::{BatchContext, LookupCache};
pub use pipeline::import_tasks;
pub use store::{
    CategoryKind, CategorySeed, ImportStore, NamedRecord, ProjectSeed, StoreError, TaskSeed,
};

/// Maximum number of drafts accepted in one import call.
pub const MAX_DRAFTS_PER_BATCH: usize = 200;

/// Largest estimate the `tasks.estimated_minutes` column can hold.
pub const MAX_ESTIMATED_MINUTES: u32 = i32::MAX as u32;

/// Analyzer confidence scores attached to a draft, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftConfidence {
    pub priority: Option<f64>,
    pub project: Option<f64>,
    pub category: Option<f64>,
}

/// An AI-proposed task before persistence.
///
/// Field aliases accept the analyzer's snake_case payload and the older
/// client's `text`/`project`/`category` keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    #[serde(default, alias = "task_text", alias = "text")]
    pub task_text: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(
        default,
        alias = "estimatedTimeMinutes",
        alias = "estimated_time_minutes"
    )]
    pub estimated_minutes: Option<u32>,
    #[serde(default, alias = "project", alias = "suggested_project")]
    pub suggested_project: Option<String>,
    #[serde(
        default,
        alias = "topic",
        alias = "category",
        alias = "suggested_topic"
    )]
    pub suggested_topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<DraftConfidence>,
}

impl TaskDraft {
    /// The raw AI labels kept on the task for traceability.
    pub fn ai_metadata(&self) -> serde_json::Value {
        serde_json::json!({
            "priority": self.priority,
            "estimatedMinutes": self.estimated_minutes,
            "suggestedProject": self.suggested_project,
            "suggestedTopic": self.suggested_topic,
            "confidence": self.confidence,
        })
    }
}

/// Caller-controlled knobs for one import.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Note the drafts were extracted from.
    pub source_note_id: Option<DbId>,
    /// Create projects/categories that do not exist yet. When off,
    /// unmatched names leave the task's reference unset.
    pub auto_create: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            source_note_id: None,
            auto_create: true,
        }
    }
}

/// Id and name of a record created during the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEntityRef {
    pub id: DbId,
    pub name: String,
}

impl NewEntityRef {
    pub fn of<T: NamedRecord>(record: &T) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_string(),
        }
    }
}

/// A draft that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftFailure {
    /// Position of the draft in the submitted batch.
    pub index: usize,
    pub message: String,
}

/// What an import call created.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub tasks_created: usize,
    pub projects_created: usize,
    pub categories_created: usize,
    pub new_projects: Vec<NewEntityRef>,
    pub new_categories: Vec<NewEntityRef>,
    pub tasks_failed: usize,
    pub failures: Vec<DraftFailure>,
}

/// Created tasks in draft order, plus the summary.
#[derive(Debug, Serialize)]
pub struct ImportOutcome<T> {
    pub tasks: Vec<T>,
    pub summary: ImportSummary,
}

/// Reject a batch before any storage access.
pub fn validate_drafts(drafts: &[TaskDraft]) -> Result<(), CoreError> {
    if drafts.is_empty() {
        return Err(CoreError::Validation(
            "Task list must contain at least one task".into(),
        ));
    }
    if drafts.len() > MAX_DRAFTS_PER_BATCH {
        return Err(CoreError::Validation(format!(
            "Task list exceeds the maximum of {MAX_DRAFTS_PER_BATCH} tasks"
        )));
    }
    if let Some(index) = drafts.iter().position(|d| d.task_text.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "Task at index {index} is missing taskText"
        )));
    }
    if let Some(index) = drafts
        .iter()
        .position(|d| d.estimated_minutes.is_some_and(|m| m > MAX_ESTIMATED_MINUTES))
    {
        return Err(CoreError::Validation(format!(
            "Task at index {index} has an estimate above {MAX_ESTIMATED_MINUTES} minutes"
        )));
    }
    Ok(())
}
