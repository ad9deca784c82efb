use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{MessagePart, MessageRole};

/// One entry of a chat's append-only message log.
///
/// `content` is the flat text kept for older readers; `parts` holds the
/// structured fragments as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    chat_id: String,
    role: MessageRole,
    content: String,
    parts: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Records a user message with its parts exactly as the client sent them.
    pub fn user(
        id: Option<String>,
        chat_id: String,
        content: String,
        parts: serde_json::Value,
    ) -> Self {
        Self {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            chat_id,
            role: MessageRole::User,
            content,
            parts,
            created_at: Utc::now(),
        }
    }

    pub fn assistant(chat_id: String, content: String, parts: Vec<MessagePart>) -> Self {
        let parts = serde_json::to_value(parts).unwrap_or(serde_json::Value::Array(Vec::new()));
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id,
            role: MessageRole::Assistant,
            content,
            parts,
            created_at: Utc::now(),
        }
    }

    pub fn restore(
        id: String,
        chat_id: String,
        role: MessageRole,
        content: String,
        parts: serde_json::Value,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            chat_id,
            role,
            content,
            parts,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn parts(&self) -> &serde_json::Value {
        &self.parts
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
