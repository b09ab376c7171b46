//! ListSequencesHandler - Query handler for a user's saved sequences.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::foundation::UserId;
use crate::domain::outreach::OutreachSequence;
use crate::ports::SequenceRepository;

#[derive(Debug, Clone)]
pub struct ListSequencesQuery {
    pub user_id: UserId,
}

/// Handler listing saved sequences in the order they were saved.
pub struct ListSequencesHandler {
    sequences: Arc<dyn SequenceRepository>,
}

impl ListSequencesHandler {
    pub fn new(sequences: Arc<dyn SequenceRepository>) -> Self {
        Self { sequences }
    }

    pub async fn handle(
        &self,
        query: ListSequencesQuery,
    ) -> Result<Vec<OutreachSequence>, OutreachError> {
        Ok(self.sequences.list_by_user(query.user_id).await?)
    }
}
