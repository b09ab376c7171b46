//! GetHistoryHandler - Query handler for a session's message history.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::conversation::Message;
use crate::domain::foundation::SessionId;
use crate::ports::MessageRepository;

/// Query for the messages of one session.
#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub session_id: SessionId,
}

/// Handler returning history oldest first. Unknown sessions yield an empty list.
pub struct GetHistoryHandler {
    messages: Arc<dyn MessageRepository>,
}

impl GetHistoryHandler {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    pub async fn handle(&self, query: GetHistoryQuery) -> Result<Vec<Message>, OutreachError> {
        Ok(self.messages.list_by_session(query.session_id).await?)
    }
}
