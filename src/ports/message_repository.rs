//! Message repository port.

use crate::domain::conversation::{Message, NewMessage};
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for chat messages.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message and bump the owning session's `updated_at`.
    ///
    /// The two writes are separate statements. A failure of the second is
    /// reported even though the message row is already stored.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure, including an unknown session
    async fn append(&self, message: &NewMessage) -> Result<Message, DomainError>;

    /// Messages in a session, oldest first (`created_at` ASC, then ID ASC).
    ///
    /// An unknown session yields an empty list.
    async fn list_by_session(&self, session_id: SessionId) -> Result<Vec<Message>, DomainError>;
}
