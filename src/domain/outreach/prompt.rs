//! Conversation assembly for sequence generation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Fixed instruction placed ahead of every conversation sent to the model.
pub const SYSTEM_INSTRUCTION: &str = r#"You are Helix, a recruiting assistant that helps recruiters write candidate outreach.

When the user asks for an outreach sequence, reply with a single JSON object and nothing else. The sequence has a title and 3 steps. For each step include the content of the outreach message and the strategy that step fulfills. Use exactly this structure:
{
  "title": "Title of the sequence",
  "steps": [
    {"Step 1": {"Content": "Content for step 1", "Strategy": "Strategy for step 1"}},
    {"Step 2": {"Content": "Content for step 2", "Strategy": "Strategy for step 2"}},
    {"Step 3": {"Content": "Content for step 3", "Strategy": "Strategy for step 3"}}
  ]
}
Make sure the output is valid JSON.

When the user is only chatting, asking a question or giving feedback, answer conversationally in plain text."#;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    System,
    User,
    Assistant,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::System => "system",
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TurnRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(TurnRole::System),
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

/// One message of the prompt sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(TurnRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }
}

/// Build the ordered prompt: instruction, prior turns as given, then the new
/// user message.
///
/// History is passed through whole. There is no truncation or token budget.
pub fn assemble_conversation(history: &[ChatTurn], user_message: &str) -> Vec<ChatTurn> {
    let mut turns = Vec::with_capacity(history.len() + 2);
    turns.push(ChatTurn::system(SYSTEM_INSTRUCTION));
    turns.extend_from_slice(history);
    turns.push(ChatTurn::user(user_message));
    turns
}
