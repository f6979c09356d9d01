//! Client for the external AI analysis service.
//!
//! - [`api`] -- HTTP client ([`api::AiAnalysisApi`]) and its error type.
//! - [`schema`] -- typed request/response contract of the service.

pub mod api;
pub mod schema;
