use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::inference::{CompletionRequest, InferenceService};
use crate::error::UpstreamError;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Client for Anthropic's Messages API.
///
/// Built once at startup; the inner `reqwest::Client` pools connections.
/// No timeout or retry is applied to calls.
#[derive(Clone)]
pub struct AnthropicClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            endpoint: format!("{}/v1/messages", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl InferenceService for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError> {
        debug!(model = %request.model, turns = request.messages.len(), "calling Anthropic");

        let res = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status: status.as_u16(), body });
        }

        let parsed: MessagesResponse = res.json().await?;
        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or(UpstreamError::MissingText)
    }
}
