// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::completion::{CompletionClient, CompletionError};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completions: CompletionClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, CompletionError> {
        Ok(Self {
            completions: CompletionClient::new(config)?,
        })
    }
}
