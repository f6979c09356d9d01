//! REST client for the AI analysis service.
//!
//! Wraps `POST /api/analyze` and `GET /api/labels` using [`reqwest`]. Every
//! failure mode (transport, non-2xx, undecodable body) is an [`AiApiError`],
//! which the API layer reports as an upstream failure.

use std::time::Duration;

use taskmind_core::error::CoreError;
use taskmind_core::types::DbId;

use crate::schema::{AnalysisResult, AnalyzeRequest};

/// HTTP client for the analysis service.
#[derive(Clone)]
pub struct AiAnalysisApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the AI analysis client.
#[derive(Debug, thiserror::Error)]
pub enum AiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("AI service error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body did not match the expected schema.
    #[error("Malformed AI service response: {0}")]
    Decode(String),
}

impl From<AiApiError> for CoreError {
    fn from(err: AiApiError) -> Self {
        CoreError::UpstreamUnavailable(err.to_string())
    }
}

impl AiAnalysisApi {
    /// Create a client for the service at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AiApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Ask the analyzer to extract task drafts from free text.
    pub async fn analyze(&self, text: &str, user_id: DbId) -> Result<AnalysisResult, AiApiError> {
        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&AnalyzeRequest { text, user_id })
            .send()
            .await?;

        let result: AnalysisResult = Self::parse_response(response).await?;
        tracing::debug!(
            user_id,
            tasks = result.tasks.len(),
            tokens_used = result.metadata.tokens_used,
            "AI analysis completed",
        );
        Ok(result)
    }

    /// Fetch the analyzer's label vocabulary. The shape is owned by the
    /// service and passed through untouched.
    pub async fn labels(&self) -> Result<serde_json::Value, AiApiError> {
        let response = self
            .client
            .get(format!("{}/api/labels", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AiApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AiApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AiApiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| AiApiError::Decode(e.to_string()))
    }
}
