//! Client for the OpenAI-format chat-completions endpoint.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

/// Persona instruction sent with every request. Static, never built from
/// user input.
const SYSTEM_PROMPT: &str =
    "Eres un asistente financiero experto que proporciona consejos claros y concisos.";

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion service returned status {0}")]
    Status(StatusCode),

    #[error("completion response carried no choices")]
    NoChoices,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Reusable completion client, shared across requests through `AppState`.
#[derive(Clone)]
pub struct CompletionClient {
    http: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(config: &AppConfig) -> Result<Self, CompletionError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            api_base: config.openai_api_base.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Sends the user's message together with the fixed system prompt and
    /// generation parameters, and returns the assistant's text trimmed of
    /// surrounding whitespace.
    pub async fn complete(&self, user_message: &str) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: user_message,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status));
        }

        let data: CompletionResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoChoices)?;

        Ok(choice.message.content.trim().to_string())
    }
}
