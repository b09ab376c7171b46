//! Session domain module.
//!
//! Chat sessions group the messages of one recruiter conversation.

mod aggregate;

pub use aggregate::{NewSession, Session, DEFAULT_SESSION_TITLE, MAX_TITLE_LENGTH};
