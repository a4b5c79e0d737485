// src/message.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Only the exact lowercase names are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// A validated conversation turn, forwarded upstream as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

// Both fields stay loose so the role is checked first and each problem gets
// its own 400 message instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<IncomingMessage>>,
}

impl ChatRequest {
    /// Checks the submitted history and turns it into the sequence sent upstream.
    pub fn into_conversation(self) -> Result<Vec<ChatMessage>, AppError> {
        let messages = match self.messages {
            Some(m) if !m.is_empty() => m,
            _ => return Err(AppError::InvalidRequest("No messages provided".to_string())),
        };

        messages
            .into_iter()
            .map(|msg| {
                let role = msg
                    .role
                    .as_deref()
                    .and_then(Role::parse)
                    .ok_or_else(|| AppError::InvalidRequest("Invalid message role".to_string()))?;
                let content = msg
                    .content
                    .ok_or_else(|| AppError::InvalidRequest("Invalid message content".to_string()))?;
                Ok(ChatMessage { role, content })
            })
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> ChatRequest {
        serde_json::from_str(body).unwrap()
    }

    fn rejection(req: ChatRequest) -> String {
        match req.into_conversation() {
            Err(AppError::InvalidRequest(msg)) => msg,
            other => panic!("expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn missing_null_and_empty_messages_are_rejected() {
        assert_eq!(rejection(request("{}")), "No messages provided");
        assert_eq!(rejection(request(r#"{"messages": null}"#)), "No messages provided");
        assert_eq!(rejection(request(r#"{"messages": []}"#)), "No messages provided");
    }

    #[test]
    fn unknown_or_missing_role_is_rejected() {
        for body in [
            r#"{"messages":[{"role":"system","content":"x"}]}"#,
            r#"{"messages":[{"role":"User","content":"x"}]}"#,
            r#"{"messages":[{"content":"x"}]}"#,
            r#"{"messages":[{"role":"system"}]}"#,
            r#"{"messages":[{"role":"user","content":"hi"},{"role":"bot","content":"x"}]}"#,
        ] {
            assert_eq!(rejection(request(body)), "Invalid message role", "{}", body);
        }
    }

    #[test]
    fn missing_content_is_rejected_after_role() {
        assert_eq!(
            rejection(request(r#"{"messages":[{"role":"user"}]}"#)),
            "Invalid message content"
        );
        assert_eq!(
            rejection(request(r#"{"messages":[{"role":"user","content":null}]}"#)),
            "Invalid message content"
        );
    }

    #[test]
    fn order_and_content_are_preserved() {
        let conversation = request(
            r#"{"messages":[
                {"role":"user","content":"Hi"},
                {"role":"assistant","content":"Hello!"},
                {"role":"user","content":"  Azure?  "}
            ]}"#,
        )
        .into_conversation()
        .unwrap();

        assert_eq!(
            conversation,
            vec![
                ChatMessage::new(Role::User, "Hi"),
                ChatMessage::new(Role::Assistant, "Hello!"),
                ChatMessage::new(Role::User, "  Azure?  "),
            ]
        );
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::new(Role::Assistant, "ok")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "ok"}));
    }
}
