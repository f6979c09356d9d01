use std::sync::Arc;
use std::time::Duration;

use taskmind_ai::api::{AiAnalysisApi, AiApiError};
use taskmind_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool and the HTTP client are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    /// Read by the auth extractor (JWT secret) and the router (timeouts, CORS).
    pub config: Arc<ServerConfig>,
    pub ai: AiAnalysisApi,
}

impl AppState {
    /// Build the state, creating the AI client from `config`.
    pub fn new(pool: DbPool, config: ServerConfig) -> Result<Self, AiApiError> {
        let ai = AiAnalysisApi::new(
            config.ai_backend_url.clone(),
            Duration::from_secs(config.ai_request_timeout_secs),
        )?;
        Ok(Self {
            pool,
            config: Arc::new(config),
            ai,
        })
    }
}
