//! Batch orchestration for AI task import.
//!
//! Drafts are processed strictly in submission order because later drafts
//! must see the projects/categories created for earlier ones. The batch is
//! not transactional: a failing draft is reported in the summary and the
//! remaining drafts are still imported. Rows written before a failure stay
//! and are always reported.

use super::context::{BatchContext, LookupCache};
use super::materializer::{materialize_category, materialize_project};
use super::store::{ImportStore, NamedRecord, TaskSeed};
use super::{
    validate_drafts, DraftFailure, ImportOptions, ImportOutcome, ImportSummary, TaskDraft,
};
use crate::error::CoreError;
use crate::task_vocab::{map_priority, TaskStatus};
use crate::types::DbId;

/// Import `drafts` for `owner_id`.
///
/// Returns an error without touching storage if the batch fails validation,
/// and before any write if the lookup cache cannot be loaded. When every
/// draft fails and nothing was written, the first draft error is returned
/// instead of an empty outcome.
pub async fn import_tasks<S: ImportStore>(
    store: &S,
    owner_id: DbId,
    drafts: &[TaskDraft],
    options: &ImportOptions,
) -> Result<ImportOutcome<S::Task>, CoreError> {
    validate_drafts(drafts)?;

    let cache = LookupCache::load(store, owner_id).await?;
    tracing::debug!(
        owner_id,
        drafts = drafts.len(),
        known_projects = cache.projects.len(),
        known_categories = cache.categories.len(),
        "Loaded import lookup cache",
    );
    let mut ctx = BatchContext::new(owner_id, options.auto_create, cache);

    let mut tasks = Vec::with_capacity(drafts.len());
    let mut failures = Vec::new();
    let mut first_error = None;

    for (index, draft) in drafts.iter().enumerate() {
        match import_draft(store, &mut ctx, draft, options.source_note_id).await {
            Ok(task) => tasks.push(task),
            Err(err) => {
                tracing::warn!(owner_id, index, error = %err, "Failed to import task draft");
                failures.push(DraftFailure {
                    index,
                    message: failure_message(&err),
                });
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    let new_projects = ctx.new_projects();
    let new_categories = ctx.new_categories();

    if tasks.is_empty() && new_projects.is_empty() && new_categories.is_empty() {
        if let Some(err) = first_error {
            return Err(err);
        }
    }

    let summary = ImportSummary {
        tasks_created: tasks.len(),
        projects_created: new_projects.len(),
        categories_created: new_categories.len(),
        new_projects,
        new_categories,
        tasks_failed: failures.len(),
        failures,
    };

    tracing::info!(
        owner_id,
        tasks_created = summary.tasks_created,
        projects_created = summary.projects_created,
        categories_created = summary.categories_created,
        tasks_failed = summary.tasks_failed,
        "AI task import finished",
    );

    Ok(ImportOutcome { tasks, summary })
}

/// Client-facing text for a failed draft. Storage details stay in the logs.
fn failure_message(err: &CoreError) -> String {
    match err {
        CoreError::Internal(_) => INTERNAL_FAILURE_MESSAGE.to_string(),
        other => other.to_string(),
    }
}

const INTERNAL_FAILURE_MESSAGE: &str = "An internal error occurred";

async fn import_draft<S: ImportStore>(
    store: &S,
    ctx: &mut BatchContext<S::Project, S::Category>,
    draft: &TaskDraft,
    source_note_id: Option<DbId>,
) -> Result<S::Task, CoreError> {
    let project = materialize_project(store, ctx, draft.suggested_project.as_deref()).await?;
    let category = materialize_category(store, ctx, draft.suggested_topic.as_deref()).await?;

    let seed = TaskSeed {
        owner_id: ctx.owner_id,
        title: draft.task_text.trim().to_string(),
        priority: map_priority(draft.priority.as_deref()),
        status: TaskStatus::NotStarted,
        project_id: project.as_ref().map(NamedRecord::id),
        category_id: category.as_ref().map(NamedRecord::id),
        estimated_minutes: draft.estimated_minutes,
        ai_generated: true,
        ai_metadata: draft.ai_metadata(),
        source_note_id,
    };

    Ok(store.create_task(&seed).await?)
}
