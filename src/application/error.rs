//! Application-level error type shared by every handler.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::AIError;

/// Errors returned by application handlers.
///
/// The HTTP layer maps `ClientInput` to 400, `NotFound` to 404 and both
/// `Upstream` and `Database` to 500. The message is what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutreachError {
    #[error("{0}")]
    ClientInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Database(String),
}

impl OutreachError {
    pub fn client_input(message: impl Into<String>) -> Self {
        OutreachError::ClientInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        OutreachError::NotFound(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            OutreachError::ClientInput(msg)
            | OutreachError::NotFound(msg)
            | OutreachError::Upstream(msg)
            | OutreachError::Database(msg) => msg,
        }
    }
}

impl From<DomainError> for OutreachError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateEmail => OutreachError::ClientInput(err.message),
            ErrorCode::DatabaseError => OutreachError::Database(err.message),
        }
    }
}

impl From<ValidationError> for OutreachError {
    fn from(err: ValidationError) -> Self {
        OutreachError::ClientInput(err.to_string())
    }
}

impl From<AIError> for OutreachError {
    fn from(err: AIError) -> Self {
        OutreachError::Upstream(err.to_string())
    }
}
