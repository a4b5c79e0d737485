use std::fmt::Debug;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::UpstreamError;
use crate::message::ChatMessage;

/// Body of one completion call. Serializes straight to the Messages API shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<ChatMessage>,
}

/// A remote model that turns a conversation into reply text.
#[async_trait]
pub trait InferenceService: Debug + Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError>;
}
