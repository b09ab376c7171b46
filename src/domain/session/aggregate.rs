//! Chat session entity.
//!
//! A session is one conversation thread between a recruiter and Helix. It
//! owns its messages by foreign key. `updated_at` moves forward whenever a
//! message is appended.

use crate::domain::foundation::{SessionId, Timestamp, UserId, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum length for session title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Title used when the client does not supply one.
pub const DEFAULT_SESSION_TITLE: &str = "New Session";

/// A persisted chat session.
///
/// # Invariants
///
/// - `title` is 1-255 characters
/// - `created_at <= updated_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    user_id: UserId,
    title: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        user_id: UserId,
        title: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Record activity at `at`. Never moves `updated_at` backwards.
    pub fn touch(&mut self, at: Timestamp) {
        if self.updated_at.is_before(&at) {
            self.updated_at = at;
        }
    }
}

/// Validated insert payload for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    user_id: UserId,
    title: String,
}

impl NewSession {
    /// Build a session for `user_id`.
    ///
    /// A missing or blank title falls back to [`DEFAULT_SESSION_TITLE`].
    ///
    /// # Errors
    ///
    /// - `TooLong` if the title exceeds 255 characters
    pub fn new(user_id: UserId, title: Option<&str>) -> Result<Self, ValidationError> {
        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => DEFAULT_SESSION_TITLE.to_string(),
        };

        let len = title.chars().count();
        if len > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, len));
        }

        Ok(Self { user_id, title })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user() -> UserId {
        UserId::from_db(7)
    }

    fn at(secs: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, secs).unwrap())
    }

    #[test]
    fn missing_title_uses_default() {
        let session = NewSession::new(user(), None).unwrap();
        assert_eq!(session.title(), DEFAULT_SESSION_TITLE);
    }

    #[test]
    fn blank_title_uses_default() {
        let session = NewSession::new(user(), Some("   ")).unwrap();
        assert_eq!(session.title(), "New Session");
    }

    #[test]
    fn supplied_title_is_trimmed() {
        let session = NewSession::new(user(), Some("  Backend hiring ")).unwrap();
        assert_eq!(session.title(), "Backend hiring");
        assert_eq!(session.user_id(), user());
    }

    #[test]
    fn rejects_too_long_title() {
        let long_title = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert!(matches!(
            NewSession::new(user(), Some(&long_title)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn touch_moves_updated_at_forward_only() {
        let mut session = Session::reconstitute(
            SessionId::from_db(1),
            user(),
            "T".to_string(),
            at(0),
            at(10),
        );

        session.touch(at(5));
        assert_eq!(session.updated_at(), &at(10));

        session.touch(at(20));
        assert_eq!(session.updated_at(), &at(20));
        assert_eq!(session.created_at(), &at(0));
    }
}
