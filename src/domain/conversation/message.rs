//! Message entity for chat sessions.
//!
//! Messages are immutable records of user/assistant exchanges within a session,
//! listed oldest first.

use crate::domain::foundation::{MessageId, SessionId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Greeting seeded into every new session.
pub const WELCOME_MESSAGE: &str =
    "Hi! I'm Helix, your recruiting assistant. How can I help you create an outreach sequence today?";

/// Author of a stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Recruiter input.
    User,
    /// Helix reply.
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("expected 'user' or 'assistant', got '{}'", other),
            )),
        }
    }
}

/// A persisted chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub session_id: SessionId,
    pub role: Role,
    pub content: String,
    pub created_at: Timestamp,
}

/// Validated insert payload for a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    session_id: SessionId,
    role: Role,
    content: String,
}

impl NewMessage {
    /// # Errors
    ///
    /// - `EmptyField` if content is empty
    pub fn new(
        session_id: SessionId,
        role: Role,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self {
            session_id,
            role,
            content,
        })
    }

    /// The assistant greeting for a freshly created session.
    pub fn welcome(session_id: SessionId) -> Self {
        Self {
            session_id,
            role: Role::Assistant,
            content: WELCOME_MESSAGE.to_string(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
