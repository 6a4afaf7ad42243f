//! Interactive AI chat client.
//!
//! A session token comes from the status endpoint; each exchange POSTs the
//! full running conversation and reads the assistant reply out of the
//! event-stream response. The server rotates the token in a response
//! header, which the client carries into the next turn.

mod cache;

pub use cache::{ChatCache, CACHE_FILE};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::{self, TransportConfig};

const STATUS_URL: &str = "https://duckduckgo.com/duckchat/v1/status";
const CHAT_URL: &str = "https://duckduckgo.com/duckchat/v1/chat";

/// Models the chat endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatModel {
    #[default]
    Gpt4oMini,
    Claude3Haiku,
    Llama70b,
    Mixtral8x7b,
}

impl ChatModel {
    /// User-facing name (CLI choice).
    pub fn as_str(self) -> &'static str {
        match self {
            ChatModel::Gpt4oMini => "gpt-4o-mini",
            ChatModel::Claude3Haiku => "claude-3-haiku",
            ChatModel::Llama70b => "llama-3.1-70b",
            ChatModel::Mixtral8x7b => "mixtral-8x7b",
        }
    }

    /// Identifier the endpoint expects on the wire.
    fn api_name(self) -> &'static str {
        match self {
            ChatModel::Gpt4oMini => "gpt-4o-mini",
            ChatModel::Claude3Haiku => "claude-3-haiku-20240307",
            ChatModel::Llama70b => "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo",
            ChatModel::Mixtral8x7b => "mistralai/Mixtral-8x7B-Instruct-v0.1",
        }
    }
}

/// One side of an exchange, as persisted and as sent on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Failure of one chat exchange.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    #[error("HTTP {0}")]
    Http(u32),

    #[error("chat token missing from status response")]
    NoVqd,

    #[error("parse: {0}")]
    Parse(String),
}

/// Stateful chat session: running conversation, rotating token, and a
/// rough token count (chars / 4, floor 1 per message).
pub struct ChatClient {
    transport: TransportConfig,
    model: ChatModel,
    vqd: Option<String>,
    messages: Vec<ChatMessage>,
    tokens: usize,
}

impl ChatClient {
    pub fn new(transport: TransportConfig, model: ChatModel) -> Self {
        Self {
            transport,
            model,
            vqd: None,
            messages: Vec::new(),
            tokens: 0,
        }
    }

    pub fn model(&self) -> ChatModel {
        self.model
    }

    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Resumes a previously persisted conversation.
    pub fn restore(&mut self, cache: ChatCache) {
        self.vqd = cache.vqd;
        self.tokens = cache.tokens;
        self.messages = cache.messages;
    }

    /// Conversation state to persist after an exchange.
    pub fn snapshot(&self) -> ChatCache {
        ChatCache {
            vqd: self.vqd.clone(),
            tokens: self.tokens,
            messages: self.messages.clone(),
        }
    }

    fn ensure_vqd(&mut self) -> Result<String, ChatError> {
        if let Some(vqd) = &self.vqd {
            return Ok(vqd.clone());
        }
        let resp = transport::get(STATUS_URL, &[("x-vqd-accept", "1")], &self.transport)?;
        if resp.status != 200 {
            return Err(ChatError::Http(resp.status));
        }
        let vqd = resp.header("x-vqd-4").ok_or(ChatError::NoVqd)?.to_string();
        self.vqd = Some(vqd.clone());
        Ok(vqd)
    }

    /// Sends one user message and returns the assistant's full reply,
    /// appending both sides to the running conversation. On failure the
    /// user message is rolled back so a retry does not duplicate it.
    pub fn send(&mut self, content: &str) -> Result<String, ChatError> {
        let vqd = self.ensure_vqd()?;
        self.messages.push(ChatMessage {
            role: "user".to_string(),
            content: content.to_string(),
        });

        let payload = serde_json::json!({
            "model": self.model.api_name(),
            "messages": self.messages,
        });
        let body = serde_json::to_vec(&payload).map_err(|e| ChatError::Parse(e.to_string()))?;

        let result = transport::post_json(
            CHAT_URL,
            &body,
            &[("x-vqd-4", vqd.as_str()), ("Accept", "text/event-stream")],
            &self.transport,
        );
        let resp = match result {
            Ok(resp) if resp.status == 200 => resp,
            Ok(resp) => {
                self.messages.pop();
                return Err(ChatError::Http(resp.status));
            }
            Err(e) => {
                self.messages.pop();
                return Err(e.into());
            }
        };

        if let Some(next) = resp.header("x-vqd-4") {
            self.vqd = Some(next.to_string());
        }

        let answer = match parse_event_stream(&resp.text()) {
            Ok(answer) => answer,
            Err(e) => {
                self.messages.pop();
                return Err(e);
            }
        };
        self.tokens += (content.len() / 4).max(1);
        self.tokens += (answer.len() / 4).max(1);
        self.messages.push(ChatMessage {
            role: "assistant".to_string(),
            content: answer.clone(),
        });
        Ok(answer)
    }
}

/// Concatenates the `message` chunks of `data:` event lines, stopping at
/// the `[DONE]` marker.
fn parse_event_stream(body: &str) -> Result<String, ChatError> {
    let mut out = String::new();
    for line in body.lines() {
        let Some(data) = line.strip_prefix("data: ") else {
            continue;
        };
        if data.trim() == "[DONE]" {
            break;
        }
        let value: serde_json::Value =
            serde_json::from_str(data).map_err(|e| ChatError::Parse(e.to_string()))?;
        if let Some(chunk) = value.get("message").and_then(|m| m.as_str()) {
            out.push_str(chunk);
        }
    }
    if out.is_empty() {
        return Err(ChatError::Parse("no message events in response".to_string()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_stream_concatenates_chunks() {
        let body = "data: {\"role\":\"assistant\",\"message\":\"Hel\"}\n\
                    data: {\"message\":\"lo\"}\n\
                    data: {\"message\":\"!\"}\n\
                    data: [DONE]\n";
        assert_eq!(parse_event_stream(body).unwrap(), "Hello!");
    }

    #[test]
    fn event_stream_ignores_non_data_lines() {
        let body = ": keepalive\n\ndata: {\"message\":\"ok\"}\n\ndata: [DONE]\n";
        assert_eq!(parse_event_stream(body).unwrap(), "ok");
    }

    #[test]
    fn event_stream_without_messages_is_an_error() {
        assert!(matches!(
            parse_event_stream("data: [DONE]\n"),
            Err(ChatError::Parse(_))
        ));
        assert!(matches!(
            parse_event_stream("data: not json\n"),
            Err(ChatError::Parse(_))
        ));
    }

    #[test]
    fn model_names() {
        assert_eq!(ChatModel::Gpt4oMini.as_str(), "gpt-4o-mini");
        assert_eq!(
            ChatModel::Llama70b.api_name(),
            "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo"
        );
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut client = ChatClient::new(TransportConfig::default(), ChatModel::Claude3Haiku);
        client.restore(ChatCache {
            vqd: Some("4-1".to_string()),
            tokens: 7,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
        });
        let snap = client.snapshot();
        assert_eq!(snap.vqd.as_deref(), Some("4-1"));
        assert_eq!(snap.tokens, 7);
        assert_eq!(snap.messages.len(), 1);
        assert_eq!(client.tokens(), 7);
    }
}
