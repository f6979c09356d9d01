//! Wire contract of the AI analysis service.
//!
//! Responses are decoded into these types at the boundary; anything that does
//! not fit is rejected by the client instead of leaking half-parsed JSON into
//! handlers. Snake_case aliases cover older analyzer builds.

use serde::{Deserialize, Serialize};
use taskmind_core::import::TaskDraft;
use taskmind_core::types::DbId;

/// Body of `POST /api/analyze`. The analyzer expects snake_case here.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
    pub user_id: DbId,
}

/// Aggregate information the analyzer reports alongside the tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    #[serde(default, alias = "projects_discovered")]
    pub projects_discovered: Vec<String>,
    #[serde(default, alias = "topics_discovered")]
    pub topics_discovered: Vec<String>,
    #[serde(default, alias = "tokens_used")]
    pub tokens_used: Option<u64>,
}

/// Response of `POST /api/analyze`.
///
/// `tasks` is required; a body without it is a malformed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub tasks: Vec<TaskDraft>,
    #[serde(default)]
    pub metadata: AnalysisMetadata,
    #[serde(default, alias = "processing_time_ms")]
    pub processing_time_ms: Option<u64>,
}
