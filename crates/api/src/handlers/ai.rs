//! Handlers for the `/ai` resource: analysis, mapping suggestions, and the
//! task import that persists accepted drafts.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskmind_ai::schema::AnalysisMetadata;
use taskmind_core::error::CoreError;
use taskmind_core::import::resolver::{clean_name, resolve_by_name};
use taskmind_core::import::{
    import_tasks, validate_drafts, ImportOptions, ImportOutcome, TaskDraft,
};
use taskmind_core::task_vocab::{format_minutes, map_priority, TaskPriority};
use taskmind_core::topic_style::suggest_icon;
use taskmind_core::types::DbId;
use taskmind_db::import_store::PgImportStore;
use taskmind_db::models::category::Category;
use taskmind_db::models::project::Project;
use taskmind_db::models::task::Task;
use taskmind_db::repositories::{CategoryRepo, NoteRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

/// Body of `POST /ai/create-tasks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTasksRequest {
    pub tasks: Vec<TaskDraft>,
    #[serde(default)]
    pub note_id: Option<DbId>,
    #[serde(default = "default_true", alias = "autoCreate")]
    pub auto_create_projects_and_topics: bool,
}

/// Body of `POST /ai/analyze-note`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeNoteRequest {
    pub text: String,
    #[serde(default)]
    pub note_id: Option<DbId>,
}

/// Body of `POST /ai/suggest-mapping`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestMappingRequest {
    #[serde(alias = "text")]
    pub task_text: String,
}

/// A draft as shown to the user before import, with display labels.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedTask {
    #[serde(flatten)]
    pub draft: TaskDraft,
    pub priority_label: TaskPriority,
    pub time_label: Option<String>,
    pub topic_icon: Option<&'static str>,
}

impl From<TaskDraft> for AnalyzedTask {
    fn from(draft: TaskDraft) -> Self {
        let priority_label = map_priority(draft.priority.as_deref());
        let time_label = draft.estimated_minutes.map(format_minutes);
        let topic_icon = clean_name(draft.suggested_topic.as_deref()).map(suggest_icon);
        Self {
            draft,
            priority_label,
            time_label,
            topic_icon,
        }
    }
}

/// Response of `POST /ai/analyze-note`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteAnalysis {
    pub tasks: Vec<AnalyzedTask>,
    pub metadata: AnalysisMetadata,
    pub processing_time_ms: Option<u64>,
    /// Whether the suggestions were stored on the referenced note.
    pub note_updated: bool,
}

/// A suggested name plus the caller's record it matches, if any.
#[derive(Debug, Serialize)]
pub struct SuggestedEntity<T> {
    pub name: Option<String>,
    pub existing: Option<T>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SuggestedPriority {
    pub value: TaskPriority,
    pub confidence: Option<f64>,
}

/// Response of `POST /ai/suggest-mapping`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSuggestion {
    pub suggested_project: SuggestedEntity<Project>,
    pub suggested_category: SuggestedEntity<Category>,
    pub suggested_priority: SuggestedPriority,
    pub estimated_minutes: Option<u32>,
    pub time_label: Option<String>,
    pub topic_icon: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/ai/create-tasks
///
/// Persists AI task drafts, resolving or creating their projects and
/// categories. Responds 201 unless every draft failed without writing
/// anything.
pub async fn create_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateTasksRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<ImportOutcome<Task>>>)> {
    let Json(input) = payload?;
    validate_drafts(&input.tasks)?;

    if let Some(note_id) = input.note_id {
        NoteRepo::find_by_id(&state.pool, auth.user_id, note_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Note",
                id: note_id,
            }))?;
    }

    let options = ImportOptions {
        source_note_id: input.note_id,
        auto_create: input.auto_create_projects_and_topics,
    };
    let store = PgImportStore::new(&state.pool);
    let outcome = import_tasks(&store, auth.user_id, &input.tasks, &options).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

/// POST /api/v1/ai/analyze-note
///
/// Runs the analyzer over free text. When `noteId` is given the note must
/// belong to the caller, and the raw analysis is stored on it.
pub async fn analyze_note(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeNoteRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<NoteAnalysis>>> {
    let Json(input) = payload?;
    let text = input.text.trim();
    if text.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Note text must not be empty".into(),
        )));
    }

    if let Some(note_id) = input.note_id {
        NoteRepo::find_by_id(&state.pool, auth.user_id, note_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Note",
                id: note_id,
            }))?;
    }

    let result = state.ai.analyze(text, auth.user_id).await?;

    let mut note_updated = false;
    if let Some(note_id) = input.note_id {
        let suggestions = serde_json::to_value(&result)
            .map_err(|e| AppError::InternalError(format!("Failed to encode analysis: {e}")))?;
        note_updated =
            NoteRepo::record_ai_suggestions(&state.pool, auth.user_id, note_id, &suggestions)
                .await?
                .is_some();
    }

    tracing::info!(
        user_id = auth.user_id,
        tasks = result.tasks.len(),
        note_updated,
        "Note analyzed",
    );

    Ok(Json(DataResponse {
        data: NoteAnalysis {
            tasks: result.tasks.into_iter().map(AnalyzedTask::from).collect(),
            metadata: result.metadata,
            processing_time_ms: result.processing_time_ms,
            note_updated,
        },
    }))
}

/// POST /api/v1/ai/suggest-mapping
///
/// Analyzes one task text and matches its suggested project and topic
/// against the caller's existing records. An analysis without any task is
/// an upstream failure.
pub async fn suggest_mapping(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<SuggestMappingRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<MappingSuggestion>>> {
    let Json(input) = payload?;
    let text = input.task_text.trim();
    if text.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "taskText must not be empty".into(),
        )));
    }

    let result = state.ai.analyze(text, auth.user_id).await?;
    let Some(draft) = result.tasks.into_iter().next() else {
        return Err(AppError::Core(CoreError::UpstreamUnavailable(
            "AI analysis returned no task for the given text".into(),
        )));
    };
    let confidence = draft.confidence.clone();

    let projects = ProjectRepo::list_by_owner(&state.pool, auth.user_id).await?;
    let categories = CategoryRepo::list_by_owner(&state.pool, auth.user_id).await?;

    let project_name = clean_name(draft.suggested_project.as_deref());
    let topic_name = clean_name(draft.suggested_topic.as_deref());

    Ok(Json(DataResponse {
        data: MappingSuggestion {
            suggested_project: SuggestedEntity {
                name: project_name.map(str::to_string),
                existing: resolve_by_name(project_name, &projects).cloned(),
                confidence: confidence.as_ref().and_then(|c| c.project),
            },
            suggested_category: SuggestedEntity {
                name: topic_name.map(str::to_string),
                existing: resolve_by_name(topic_name, &categories).cloned(),
                confidence: confidence.as_ref().and_then(|c| c.category),
            },
            suggested_priority: SuggestedPriority {
                value: map_priority(draft.priority.as_deref()),
                confidence: confidence.as_ref().and_then(|c| c.priority),
            },
            estimated_minutes: draft.estimated_minutes,
            time_label: draft.estimated_minutes.map(format_minutes),
            topic_icon: topic_name.map(suggest_icon),
        },
    }))
}

/// GET /api/v1/ai/labels
pub async fn labels(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let labels = state.ai.labels().await?;
    Ok(Json(DataResponse { data: labels }))
}
