//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Recruiter accounts
//! - `PostgresSessionRepository` - Chat sessions
//! - `PostgresMessageRepository` - Session messages (bumps session `updated_at`)
//! - `PostgresSequenceRepository` - Saved outreach sequences
//!
//! Schema lives in `migrations/` and is applied with [`run_migrations`].

mod message_repository;
mod sequence_repository;
mod session_repository;
mod user_repository;

pub use message_repository::PostgresMessageRepository;
pub use sequence_repository::PostgresSequenceRepository;
pub use session_repository::PostgresSessionRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow, Postgres};
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Open a connection pool sized and timed from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .max_lifetime(Some(config.max_lifetime()))
        .connect(&config.url)
        .await
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

// ════════════════════════════════════════════════════════════════════════════
// Row helpers
// ════════════════════════════════════════════════════════════════════════════

/// Read one column, reporting decode failures as `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}
