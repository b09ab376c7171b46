//! PostgreSQL implementation of MessageRepository.
//!
//! Appending a message also moves the owning session's `updated_at`. The two
//! statements run outside a transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::conversation::{Message, NewMessage, Role};
use crate::domain::foundation::{DomainError, MessageId, SessionId, Timestamp};
use crate::ports::MessageRepository;

/// PostgreSQL implementation of MessageRepository.
#[derive(Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn append(&self, message: &NewMessage) -> Result<Message, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO messages (session_id, role, content)
            VALUES ($1, $2, $3)
            RETURNING id, session_id, role, content, created_at
            "#,
        )
        .bind(message.session_id().as_i64())
        .bind(message.role().as_str())
        .bind(message.content())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert message: {}", e)))?;

        let stored = row_to_message(&row)?;

        sqlx::query(
            r#"
            UPDATE sessions
            SET updated_at = GREATEST(updated_at, $2)
            WHERE id = $1
            "#,
        )
        .bind(stored.session_id.as_i64())
        .bind(stored.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to update session timestamp: {}", e))
                .with_detail("message_id", stored.id.to_string())
        })?;

        Ok(stored)
    }

    async fn list_by_session(&self, session_id: SessionId) -> Result<Vec<Message>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, role, content, created_at
            FROM messages
            WHERE session_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(session_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch messages: {}", e)))?;

        rows.iter().map(row_to_message).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn str_to_role(s: &str) -> Result<Role, DomainError> {
    s.parse::<Role>()
        .map_err(|_| DomainError::database(format!("Invalid message role: {}", s)))
}

fn row_to_message(row: &PgRow) -> Result<Message, DomainError> {
    let role: String = column(row, "role")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;

    Ok(Message {
        id: MessageId::from_db(column(row, "id")?),
        session_id: SessionId::from_db(column(row, "session_id")?),
        role: str_to_role(&role)?,
        content: column(row, "content")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}
