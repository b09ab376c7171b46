//! ListUserSessionsHandler - Query handler for listing a user's sessions.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::foundation::UserId;
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// Query to list sessions for a user.
#[derive(Debug, Clone)]
pub struct ListUserSessionsQuery {
    pub user_id: UserId,
}

/// Handler for listing sessions, newest first.
pub struct ListUserSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl ListUserSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: ListUserSessionsQuery) -> Result<Vec<Session>, OutreachError> {
        let sessions = self.sessions.list_by_user(query.user_id).await?;
        tracing::debug!(user_id = %query.user_id, count = sessions.len(), "Listed sessions");
        Ok(sessions)
    }
}
