//! PostgreSQL implementation of SequenceRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, SequenceId, Timestamp, UserId};
use crate::domain::outreach::{NewOutreachSequence, OutreachSequence};
use crate::ports::SequenceRepository;

/// PostgreSQL implementation of SequenceRepository.
#[derive(Clone)]
pub struct PostgresSequenceRepository {
    pool: PgPool,
}

impl PostgresSequenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceRepository for PostgresSequenceRepository {
    async fn save(&self, sequence: &NewOutreachSequence) -> Result<OutreachSequence, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO outreach_sequences (user_id, sequence_text)
            VALUES ($1, $2)
            RETURNING id, user_id, sequence_text, created_at
            "#,
        )
        .bind(sequence.user_id().as_i64())
        .bind(sequence.sequence_text())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert sequence: {}", e)))?;

        row_to_sequence(&row)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<OutreachSequence>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, sequence_text, created_at
            FROM outreach_sequences
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch sequences: {}", e)))?;

        rows.iter().map(row_to_sequence).collect()
    }
}

fn row_to_sequence(row: &PgRow) -> Result<OutreachSequence, DomainError> {
    let created_at: DateTime<Utc> = column(row, "created_at")?;

    Ok(OutreachSequence {
        id: SequenceId::from_db(column(row, "id")?),
        user_id: UserId::from_db(column(row, "user_id")?),
        sequence_text: column(row, "sequence_text")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}
