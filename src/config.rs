//! Process configuration, read once at startup.

use std::time::Duration;

/// Configuration for the backend, constructed in `main` and passed by
/// reference into everything that needs it.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address to bind the HTTP listener.
    pub bind_addr: String,
    /// Browser origin allowed by the CORS policy.
    pub allowed_origin: String,
    /// Credential for the completion API. May be empty, in which case every
    /// chat request fails at the completion step.
    pub openai_api_key: String,
    /// Base URL of the completion API.
    pub openai_api_base: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Timeout applied to each outbound completion call.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Reads configuration from environment variables with defaults.
    ///
    /// | Variable                  | Default                     |
    /// |---------------------------|-----------------------------|
    /// | `BIND_ADDR`               | `127.0.0.1:8082`            |
    /// | `ALLOWED_ORIGIN`          | `http://localhost:8080`     |
    /// | `OPENAI_API_KEY`          | empty                       |
    /// | `OPENAI_API_BASE`         | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`            | `gpt-3.5-turbo`             |
    /// | `COMPLETION_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("COMPLETION_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8082".into()),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_api_base: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".into()),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
