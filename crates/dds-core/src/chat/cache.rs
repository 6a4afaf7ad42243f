//! Conversation cache: a JSON state file read at session start and
//! rewritten after every exchange.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::ChatMessage;

/// Cache filename, created in the working directory.
pub const CACHE_FILE: &str = "dds_chat_conversation.json";

/// Persisted conversation state: session token, rough token count, and the
/// full message history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCache {
    #[serde(default)]
    pub vqd: Option<String>,
    #[serde(default)]
    pub tokens: usize,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatCache {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read chat cache {}", path.display()))?;
        serde_json::from_str(&data).context("parse chat cache")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize chat cache")?;
        fs::write(path, json).with_context(|| format!("write chat cache {}", path.display()))
    }
}
