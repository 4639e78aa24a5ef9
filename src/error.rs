//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::services::completion::CompletionError;

/// Everything a handler can fail with. Only two outcomes are visible to the
/// caller; completion failures keep their detail for the log line only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no message provided")]
    MissingMessage,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingMessage => (StatusCode::BAD_REQUEST, "No message provided"),
            AppError::Completion(err) => {
                error!(%err, "chat completion failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error processing request")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
