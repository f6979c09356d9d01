use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// | Env Var                   | Default                    |
/// |---------------------------|----------------------------|
/// | `HOST`                    | `0.0.0.0`                  |
/// | `PORT`                    | `3000`                     |
/// | `CORS_ORIGINS`            | `http://localhost:5173`    |
/// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
/// | `SHUTDOWN_TIMEOUT_SECS`   | `30`                       |
/// | `AI_BACKEND_URL`          | `http://localhost:8000`    |
/// | `AI_REQUEST_TIMEOUT_SECS` | `30`                       |
///
/// JWT settings are read by [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Base URL of the AI analysis service.
    pub ai_backend_url: String,
    /// Budget for a single call to the AI service.
    pub ai_request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// # Panics
    ///
    /// Panics on values that do not parse, or when JWT settings are missing.
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_parse("SHUTDOWN_TIMEOUT_SECS", 30),
            ai_backend_url: env_or("AI_BACKEND_URL", "http://localhost:8000"),
            ai_request_timeout_secs: env_parse("AI_REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}
