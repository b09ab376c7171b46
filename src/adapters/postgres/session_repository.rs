//! PostgreSQL implementation of SessionRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, SessionId, Timestamp, UserId};
use crate::domain::session::{NewSession, Session};
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn create(&self, session: &NewSession) -> Result<Session, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO sessions (user_id, title)
            VALUES ($1, $2)
            RETURNING id, user_id, title, created_at, updated_at
            "#,
        )
        .bind(session.user_id().as_i64())
        .bind(session.title())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert session: {}", e)))?;

        row_to_session(&row)
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, created_at, updated_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch session: {}", e)))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, created_at, updated_at
            FROM sessions
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch sessions by user: {}", e)))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn touch(&self, id: SessionId) -> Result<(), DomainError> {
        sqlx::query("UPDATE sessions SET updated_at = NOW() WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to touch session: {}", e)))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_session(row: &PgRow) -> Result<Session, DomainError> {
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;

    Ok(Session::reconstitute(
        SessionId::from_db(column(row, "id")?),
        UserId::from_db(column(row, "user_id")?),
        column(row, "title")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
