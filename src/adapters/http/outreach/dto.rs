//! HTTP DTOs for the outreach sequence endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::ValidationError;
use crate::domain::outreach::{ChatTurn, ExtractedReply, OutreachSequence, ReplyKind};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One prior turn supplied by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextTurnRequest {
    pub role: String,
    pub content: String,
}

impl ContextTurnRequest {
    pub fn into_turn(self) -> Result<ChatTurn, ValidationError> {
        Ok(ChatTurn::new(self.role.parse()?, self.content))
    }
}

/// Request to generate a reply from the model.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSequenceRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub context: Option<Vec<ContextTurnRequest>>,
}

/// Request to save sequence text for a user.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveSequenceRequest {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub sequence_text: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Model reply, classified.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSequenceResponse {
    pub response: String,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<Value>,
}

impl From<ExtractedReply> for GenerateSequenceResponse {
    fn from(reply: ExtractedReply) -> Self {
        match reply {
            ExtractedReply::Message(text) => Self {
                response: text,
                kind: ReplyKind::Message,
                json: None,
            },
            ExtractedReply::Sequence {
                confirmation,
                sequence,
            } => Self {
                response: confirmation,
                kind: ReplyKind::Sequence,
                json: Some(sequence.into_value()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Saved sequence as listed by `GET /get_sequences/:user_id`.
#[derive(Debug, Clone, Serialize)]
pub struct SavedSequenceResponse {
    pub id: i64,
    pub text: String,
}

impl From<OutreachSequence> for SavedSequenceResponse {
    fn from(sequence: OutreachSequence) -> Self {
        Self {
            id: sequence.id.as_i64(),
            text: sequence.sequence_text,
        }
    }
}
