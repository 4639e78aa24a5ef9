use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Absent, non-JSON and wrongly-shaped bodies all count as "no message".
    let Ok(Json(ChatRequest { message })) = payload else {
        return Err(AppError::MissingMessage);
    };

    if message.trim().is_empty() {
        return Err(AppError::MissingMessage);
    }

    // The message goes upstream unmodified; only validation trims.
    let text = state.completions.complete(&message).await?;

    Ok(Json(ChatResponse { response: text }))
}
