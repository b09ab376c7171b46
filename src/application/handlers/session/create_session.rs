//! CreateSessionHandler - Command handler for opening a chat session.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::conversation::NewMessage;
use crate::domain::foundation::UserId;
use crate::domain::session::{NewSession, Session};
use crate::ports::{MessageRepository, SessionRepository};

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub user_id: UserId,
    /// Missing or blank titles fall back to the default title.
    pub title: Option<String>,
}

/// Handler for creating sessions.
///
/// Every new session is seeded with the assistant welcome message. The
/// session row and the welcome message are written by two separate calls.
pub struct CreateSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl CreateSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { sessions, messages }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<Session, OutreachError> {
        // 1. Validate
        let new_session = NewSession::new(cmd.user_id, cmd.title.as_deref())?;

        // 2. Persist session
        let mut session = self.sessions.create(&new_session).await?;

        // 3. Seed welcome message
        let welcome = self.messages.append(&NewMessage::welcome(session.id())).await?;
        session.touch(welcome.created_at);

        tracing::info!(
            session_id = %session.id(),
            user_id = %session.user_id(),
            "Session created"
        );

        Ok(session)
    }
}
