//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DomainError::new(
                ErrorCode::DuplicateEmail,
                format!("Email already registered: {}", user.email()),
            ),
            other => DomainError::database(format!("Failed to insert user: {}", other)),
        })?;

        row_to_user(&row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, email FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user by email: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    Ok(User {
        id: UserId::from_db(column(row, "id")?),
        name: column(row, "name")?,
        email: column(row, "email")?,
    })
}
