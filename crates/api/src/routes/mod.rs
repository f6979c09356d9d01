pub mod ai;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ai/create-tasks                                 import drafts (POST)
/// /ai/analyze-note                                 analyze free text (POST)
/// /ai/suggest-mapping                              match one task (POST)
/// /ai/labels                                       analyzer vocabulary (GET)
/// ```
///
/// Every route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/ai", ai::router())
}
