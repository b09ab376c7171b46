//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps and error types shared by every Helix domain module.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MessageId, SequenceId, SessionId, UserId};
pub use timestamp::Timestamp;
