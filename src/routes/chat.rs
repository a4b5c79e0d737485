use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    let conversation = payload.into_conversation()?;

    info!(turns = conversation.len(), "forwarding conversation");
    let reply = state.assistant.reply(conversation).await?;

    Ok(Json(ChatResponse { reply }))
}
