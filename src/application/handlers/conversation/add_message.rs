//! AddMessageHandler - Command handler for appending a chat message.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::conversation::{Message, NewMessage, Role};
use crate::domain::foundation::SessionId;
use crate::ports::MessageRepository;

/// Command to append a message to a session.
#[derive(Debug, Clone)]
pub struct AddMessageCommand {
    pub session_id: SessionId,
    pub role: Role,
    pub content: String,
}

/// Handler for appending messages.
///
/// The repository bumps the owning session's `updated_at`. A session that
/// does not exist surfaces as the store's foreign key failure.
pub struct AddMessageHandler {
    messages: Arc<dyn MessageRepository>,
}

impl AddMessageHandler {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    pub async fn handle(&self, cmd: AddMessageCommand) -> Result<Message, OutreachError> {
        let new_message = NewMessage::new(cmd.session_id, cmd.role, cmd.content)?;
        let message = self.messages.append(&new_message).await?;

        tracing::debug!(
            session_id = %message.session_id,
            message_id = %message.id,
            role = %message.role,
            "Message stored"
        );

        Ok(message)
    }
}
