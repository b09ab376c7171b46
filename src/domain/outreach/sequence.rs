//! Saved outreach sequences.
//!
//! A saved sequence is stored exactly as the client serialized it. Steps are
//! never normalized into rows.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SequenceId, Timestamp, UserId, ValidationError};

/// A persisted outreach sequence owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachSequence {
    pub id: SequenceId,
    pub user_id: UserId,
    pub sequence_text: String,
    pub created_at: Timestamp,
}

/// Insert payload for a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOutreachSequence {
    user_id: UserId,
    sequence_text: String,
}

impl NewOutreachSequence {
    /// # Errors
    ///
    /// - `EmptyField` if the text is empty
    pub fn new(user_id: UserId, sequence_text: impl Into<String>) -> Result<Self, ValidationError> {
        let sequence_text = sequence_text.into();
        if sequence_text.is_empty() {
            return Err(ValidationError::empty_field("sequence_text"));
        }
        Ok(Self {
            user_id,
            sequence_text,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn sequence_text(&self) -> &str {
        &self.sequence_text
    }
}
