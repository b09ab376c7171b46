//! In-Memory Store Adapter
//!
//! Keeps users, sessions, messages and sequences in process memory.
//! Useful for testing and development. Ownership references are checked the
//! way the database foreign keys would check them, and emails are unique.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::{Message, NewMessage};
use crate::domain::foundation::{
    DomainError, ErrorCode, MessageId, SequenceId, SessionId, Timestamp, UserId,
};
use crate::domain::outreach::{NewOutreachSequence, OutreachSequence};
use crate::domain::session::{NewSession, Session};
use crate::domain::user::{NewUser, User};
use crate::ports::{MessageRepository, SequenceRepository, SessionRepository, UserRepository};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    sessions: BTreeMap<i64, Session>,
    messages: BTreeMap<i64, Message>,
    sequences: BTreeMap<i64, OutreachSequence>,
    last_id: i64,
}

impl Tables {
    // one counter for every table; ids only need to be unique and increasing
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn foreign_key_violation(table: &str, column: &str, value: i64) -> DomainError {
        DomainError::database(format!(
            "insert into {} violates foreign key: {}={} does not exist",
            table, column, value
        ))
    }
}

/// In-memory implementation of every repository port.
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages across all sessions.
    pub async fn message_count(&self) -> usize {
        self.tables.read().await.messages.len()
    }

    /// Number of stored sessions across all users.
    pub async fn session_count(&self) -> usize {
        self.tables.read().await.sessions.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateEmail,
                format!("Email already registered: {}", user.email()),
            ));
        }

        let id = tables.next_id();
        let stored = User {
            id: UserId::from_db(id),
            name: user.name().to_string(),
            email: user.email().to_string(),
        };
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().await.users.get(&id.as_i64()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn create(&self, session: &NewSession) -> Result<Session, DomainError> {
        let mut tables = self.tables.write().await;

        let owner = session.user_id().as_i64();
        if !tables.users.contains_key(&owner) {
            return Err(Tables::foreign_key_violation("sessions", "user_id", owner));
        }

        let id = tables.next_id();
        let now = Timestamp::now();
        let stored = Session::reconstitute(
            SessionId::from_db(id),
            session.user_id(),
            session.title().to_string(),
            now,
            now,
        );
        tables.sessions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.tables.read().await.sessions.get(&id.as_i64()).cloned())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Session>, DomainError> {
        let tables = self.tables.read().await;
        let mut sessions: Vec<Session> = tables
            .sessions
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(sessions)
    }

    async fn touch(&self, id: SessionId) -> Result<(), DomainError> {
        if let Some(session) = self.tables.write().await.sessions.get_mut(&id.as_i64()) {
            session.touch(Timestamp::now());
        }
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn append(&self, message: &NewMessage) -> Result<Message, DomainError> {
        let mut tables = self.tables.write().await;

        let session_key = message.session_id().as_i64();
        if !tables.sessions.contains_key(&session_key) {
            return Err(Tables::foreign_key_violation(
                "messages",
                "session_id",
                session_key,
            ));
        }

        let id = tables.next_id();
        let stored = Message {
            id: MessageId::from_db(id),
            session_id: message.session_id(),
            role: message.role(),
            content: message.content().to_string(),
            created_at: Timestamp::now(),
        };
        tables.messages.insert(id, stored.clone());

        if let Some(session) = tables.sessions.get_mut(&session_key) {
            session.touch(stored.created_at);
        }

        Ok(stored)
    }

    async fn list_by_session(&self, session_id: SessionId) -> Result<Vec<Message>, DomainError> {
        let tables = self.tables.read().await;
        let mut messages: Vec<Message> = tables
            .messages
            .values()
            .filter(|m| m.session_id == session_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(messages)
    }
}

#[async_trait]
impl SequenceRepository for InMemoryStore {
    async fn save(&self, sequence: &NewOutreachSequence) -> Result<OutreachSequence, DomainError> {
        let mut tables = self.tables.write().await;

        let owner = sequence.user_id().as_i64();
        if !tables.users.contains_key(&owner) {
            return Err(Tables::foreign_key_violation(
                "outreach_sequences",
                "user_id",
                owner,
            ));
        }

        let id = tables.next_id();
        let stored = OutreachSequence {
            id: SequenceId::from_db(id),
            user_id: sequence.user_id(),
            sequence_text: sequence.sequence_text().to_string(),
            created_at: Timestamp::now(),
        };
        tables.sequences.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<OutreachSequence>, DomainError> {
        let tables = self.tables.read().await;
        // BTreeMap iteration is already id order
        Ok(tables
            .sequences
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}
