use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-tasks", post(ai::create_tasks))
        .route("/analyze-note", post(ai::analyze_note))
        .route("/suggest-mapping", post(ai::suggest_mapping))
        .route("/labels", get(ai::labels))
}
