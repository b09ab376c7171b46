//! User domain module.
//!
//! Recruiters who own chat sessions and saved sequences.

mod account;

pub use account::{NewUser, User, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
