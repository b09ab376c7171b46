//! Saved outreach sequence repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::outreach::{NewOutreachSequence, OutreachSequence};
use async_trait::async_trait;

/// Repository port for saved outreach sequences.
#[async_trait]
pub trait SequenceRepository: Send + Sync {
    /// Store a sequence verbatim.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure, including an unknown owner
    async fn save(&self, sequence: &NewOutreachSequence) -> Result<OutreachSequence, DomainError>;

    /// All sequences saved by a user in insertion order.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<OutreachSequence>, DomainError>;
}
