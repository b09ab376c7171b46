//! HTTP DTOs for chat message endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{Message, Role};

/// Request to append a message to a session.
#[derive(Debug, Clone, Deserialize)]
pub struct AddMessageRequest {
    #[serde(default)]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Stored message as returned by history and append.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub role: Role,
    pub content: String,
    pub created_at: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.as_i64(),
            role: message.role,
            content: message.content,
            created_at: message.created_at.to_rfc3339(),
        }
    }
}
