//! SaveSequenceHandler - Command handler for storing a sequence verbatim.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::foundation::UserId;
use crate::domain::outreach::{NewOutreachSequence, OutreachSequence};
use crate::ports::SequenceRepository;

/// Command to save serialized sequence text for a user.
#[derive(Debug, Clone)]
pub struct SaveSequenceCommand {
    pub user_id: UserId,
    pub sequence_text: String,
}

/// Handler for saving sequences. The text is stored as given, without parsing.
pub struct SaveSequenceHandler {
    sequences: Arc<dyn SequenceRepository>,
}

impl SaveSequenceHandler {
    pub fn new(sequences: Arc<dyn SequenceRepository>) -> Self {
        Self { sequences }
    }

    pub async fn handle(&self, cmd: SaveSequenceCommand) -> Result<OutreachSequence, OutreachError> {
        let new_sequence = NewOutreachSequence::new(cmd.user_id, cmd.sequence_text)?;
        let saved = self.sequences.save(&new_sequence).await?;
        tracing::info!(sequence_id = %saved.id, user_id = %saved.user_id, "Sequence saved");
        Ok(saved)
    }
}
