//! Session repository port.
//!
//! Sessions are created and read. The only mutation is the `updated_at`
//! refresh when a message is appended.

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::{NewSession, Session};
use async_trait::async_trait;

/// Repository port for chat sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a new session and return it with its assigned ID and timestamps.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure, including an unknown owner
    async fn create(&self, session: &NewSession) -> Result<Session, DomainError>;

    /// Find a session by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError>;

    /// All sessions owned by a user, newest first (`created_at` DESC, then ID DESC).
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Session>, DomainError>;

    /// Bump `updated_at` to now. A missing session is not an error.
    async fn touch(&self, id: SessionId) -> Result<(), DomainError>;
}
